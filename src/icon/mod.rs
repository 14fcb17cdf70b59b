//! Single-icon conversion.
//!
//! # Modules
//!
//! - [`dimension`]: declared width/height extraction (48×48 fallback)
//! - [`scale`]: clamp to the maximum footprint
//! - [`template`]: mxGraph fragment with the inline SVG
//! - [`codec`]: raw deflate + base64 blob
//! - [`record`]: the resulting library entry
//!
//! # Pipeline
//!
//! ```text
//! SVG text
//!    │
//!    ├──► dimension ──► scale ──┐
//!    │                          ▼
//!    └──────────────────► template ──► codec ──► IconRecord
//! ```

pub mod codec;
pub mod dimension;
pub mod record;
pub mod scale;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use codec::CodecError;
pub use record::{AspectPolicy, IconRecord};

/// Default maximum icon side in the library palette.
pub const DEFAULT_MAX_SIZE: u32 = 80;

/// Per-icon conversion failure.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot encode icon")]
    Codec(#[from] CodecError),
}

/// Convert SVG content into a library entry.
pub fn convert_svg(
    svg_content: &str,
    title: impl Into<String>,
    max_size: u32,
) -> Result<IconRecord, ConvertError> {
    let (width, height) = dimension::svg_dimensions(svg_content);
    let (width, height) = scale::fit_within(width, height, max_size);

    let fragment = template::mxgraph_fragment(svg_content, width, height);
    let xml = codec::encode(&fragment)?;

    Ok(IconRecord {
        aspect: AspectPolicy::Fixed,
        height,
        title: title.into(),
        width,
        xml,
    })
}

/// Read an SVG file and convert it, titling it after the file stem.
pub fn convert_file(path: &Path, max_size: u32) -> Result<IconRecord, ConvertError> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::Io(path.to_path_buf(), e))?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    convert_svg(&content, record::title_from_stem(&stem), max_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="160" height="40"><rect/></svg>"#;

    #[test]
    fn test_convert_svg_scales_and_encodes() {
        let record = convert_svg(WIDE, "Wide", 80).unwrap();
        assert_eq!((record.width, record.height), (80, 20));
        assert_eq!(record.aspect, AspectPolicy::Fixed);

        let fragment = codec::decode(&record.xml).unwrap();
        assert_eq!(fragment, template::mxgraph_fragment(WIDE, 80, 20));
    }

    #[test]
    fn test_convert_svg_unparsable_uses_fallback() {
        let record = convert_svg("<svg", "Broken", 80).unwrap();
        assert_eq!((record.width, record.height), (48, 48));
    }

    #[test]
    fn test_convert_file_title_from_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("10021-icon-service-Virtual_Machines.svg");
        fs::write(&path, WIDE).unwrap();

        let record = convert_file(&path, DEFAULT_MAX_SIZE).unwrap();
        assert_eq!(record.title, "10021 Icon Service Virtual Machines");
    }

    #[test]
    fn test_convert_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(&dir.path().join("nope.svg"), 80).unwrap_err();
        assert!(matches!(err, ConvertError::Io(..)));
        assert!(err.to_string().contains("nope.svg"));
    }

    #[test]
    fn test_convert_file_not_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binary.svg");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(matches!(convert_file(&path, 80), Err(ConvertError::Io(..))));
    }
}
