//! mxGraph fragment for a single image vertex.
//!
//! draw.io reads the cell style and geometry verbatim, so the layout below
//! must stay byte-identical across icons. Only the image data and the two
//! geometry numbers change.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters left as-is inside the style attribute (RFC 3986 unreserved).
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode SVG content for an inline `data:image/svg+xml,` reference.
///
/// Base64 first, then percent-encoding, so `+`, `/` and `=` survive the
/// style string parser.
pub fn encode_image_data(svg_content: &str) -> String {
    let base64 = BASE64.encode(svg_content.as_bytes());
    utf8_percent_encode(&base64, UNRESERVED).to_string()
}

/// Build the mxGraph model for one icon.
pub fn mxgraph_fragment(svg_content: &str, width: u32, height: u32) -> String {
    let data = encode_image_data(svg_content);
    format!(
        r#"<mxGraphModel>
  <root>
    <mxCell id="0"/>
    <mxCell id="1" parent="0"/>
    <mxCell id="2" value="" style="shape=image;verticalLabelPosition=bottom;labelBackgroundColor=default;verticalAlign=top;aspect=fixed;imageAspect=0;image=data:image/svg+xml,{data};" vertex="1" parent="1">
      <mxGeometry width="{width}" height="{height}" as="geometry"/>
    </mxCell>
  </root>
</mxGraphModel>"#
    )
}
