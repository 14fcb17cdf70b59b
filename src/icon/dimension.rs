//! Declared width/height extraction.
//!
//! Only the root element's `width`/`height` attributes are read. Units are
//! dropped (`"48px"` → 48), fractional sizes are truncated.

use quick_xml::{Reader, events::Event};
use regex::Regex;
use std::sync::LazyLock;

/// Size used when the markup or its attributes cannot be read.
pub const FALLBACK_SIZE: u32 = 48;

static XML_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\?xml[^>]*\?>").expect("valid regex"));

/// Extract `(width, height)` from SVG content.
///
/// Total over arbitrary input: any parse failure yields `(48, 48)`.
pub fn svg_dimensions(content: &str) -> (u32, u32) {
    root_size(content).unwrap_or((FALLBACK_SIZE, FALLBACK_SIZE))
}

fn root_size(content: &str) -> Option<(u32, u32)> {
    let content = content.trim_start_matches('\u{feff}');
    let cleaned = XML_DECL.replace_all(content, "");
    let (width, height) = root_attributes(&cleaned)?;

    let width = parse_dimension(width.as_deref().unwrap_or("48"))?;
    let height = parse_dimension(height.as_deref().unwrap_or("48"))?;
    Some((width, height))
}

/// Walk the whole document, returning the root's raw `width`/`height`.
///
/// Returns `None` for malformed markup: no root element, mismatched or
/// unclosed tags, or anything but whitespace after the root closes.
fn root_attributes(markup: &str) -> Option<(Option<String>, Option<String>)> {
    let mut reader = Reader::from_str(markup);
    let mut root: Option<(Option<String>, Option<String>)> = None;
    let mut depth = 0usize;

    loop {
        match reader.read_event().ok()? {
            Event::Start(e) => {
                if depth == 0 {
                    if root.is_some() {
                        return None;
                    }
                    root = Some(size_attributes(&e)?);
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    if root.is_some() {
                        return None;
                    }
                    root = Some(size_attributes(&e)?);
                }
            }
            Event::End(_) => depth = depth.checked_sub(1)?,
            Event::Text(t) if depth == 0 => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
            }
            Event::CData(_) if depth == 0 => return None,
            Event::Eof => break,
            _ => {}
        }
    }

    if depth != 0 {
        return None;
    }
    root
}

fn size_attributes(
    element: &quick_xml::events::BytesStart<'_>,
) -> Option<(Option<String>, Option<String>)> {
    let mut width = None;
    let mut height = None;
    for attr in element.attributes() {
        let attr = attr.ok()?;
        let value = String::from_utf8_lossy(&attr.value).into_owned();
        match attr.key.as_ref() {
            b"width" => width = Some(value),
            b"height" => height = Some(value),
            _ => {}
        }
    }
    Some((width, height))
}

/// Convert a raw attribute value like `"32.5px"` to a positive integer.
///
/// Keeps digits and `.` only; an empty remainder means the default size.
/// A malformed number (`"1.2.3"`) or a value truncating to zero is rejected.
pub fn parse_dimension(raw: &str) -> Option<u32> {
    let numeric: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if numeric.is_empty() {
        return Some(FALLBACK_SIZE);
    }

    let value: f64 = numeric.parse().ok()?;
    if !value.is_finite() || value < 1.0 || value > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(value.trunc() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_dimensions() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="32"></svg>"#;
        assert_eq!(svg_dimensions(svg), (64, 32));
    }

    #[test]
    fn test_units_and_fractions() {
        let svg = r#"<?xml version="1.0" encoding="utf-8"?>
<svg width="18px" height="17.9pt"><path d="M0 0"/></svg>"#;
        assert_eq!(svg_dimensions(svg), (18, 17));
    }

    #[test]
    fn test_missing_attributes_default() {
        assert_eq!(svg_dimensions(r#"<svg viewBox="0 0 18 18"/>"#), (48, 48));
        assert_eq!(svg_dimensions(r#"<svg width="100"/>"#), (100, 48));
    }

    #[test]
    fn test_percentage_only_digits_kept() {
        assert_eq!(svg_dimensions(r#"<svg width="100%" height="100%"/>"#), (100, 100));
        assert_eq!(svg_dimensions(r#"<svg width="auto" height="auto"/>"#), (48, 48));
    }

    #[test]
    fn test_malformed_number_falls_back_for_both() {
        assert_eq!(svg_dimensions(r#"<svg width="1.2.3" height="20"/>"#), (48, 48));
        assert_eq!(svg_dimensions(r#"<svg width="." height="20"/>"#), (48, 48));
        assert_eq!(svg_dimensions(r#"<svg width="0" height="20"/>"#), (48, 48));
    }

    #[test]
    fn test_malformed_markup_falls_back() {
        for input in [
            "",
            "not xml at all",
            "<svg width=\"10\" height=\"10\">",
            "<svg width=\"10\" height=\"10\"></g>",
            "<svg width=\"10\" height=\"10\"/><svg/>",
            "<svg width=\"10\" height=\"10\"/>trailing",
            "<svg width=10 height=10/>",
        ] {
            assert_eq!(svg_dimensions(input), (48, 48), "input: {input:?}");
        }
    }

    #[test]
    fn test_nested_elements_ignored() {
        let svg = r#"<svg width="24" height="24"><rect width="500" height="500"/></svg>"#;
        assert_eq!(svg_dimensions(svg), (24, 24));
    }

    #[test]
    fn test_doctype_and_comments() {
        let svg = r#"<!-- generator -->
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="40" height="30"></svg>
"#;
        assert_eq!(svg_dimensions(svg), (40, 30));
    }

    #[test]
    fn test_byte_order_mark() {
        let svg = "\u{feff}<?xml version=\"1.0\"?><svg width=\"20\" height=\"10\"/>";
        assert_eq!(svg_dimensions(svg), (20, 10));
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("42"), Some(42));
        assert_eq!(parse_dimension("42.9"), Some(42));
        assert_eq!(parse_dimension("-5"), Some(5));
        assert_eq!(parse_dimension("em"), Some(48));
        assert_eq!(parse_dimension("0.5"), None);
        assert_eq!(parse_dimension("99999999999999999999"), None);
    }
}
