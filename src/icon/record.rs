//! Library entry type.

use serde::{Deserialize, Serialize};

/// How draw.io treats the icon's width/height ratio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectPolicy {
    /// Resizing keeps the ratio.
    #[default]
    Fixed,
}

/// One entry of an `<mxlibrary>` document.
///
/// Fields are declared in lexicographic key order; serde emits them in
/// declaration order, which gives sorted keys without a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub aspect: AspectPolicy,
    #[serde(rename = "h")]
    pub height: u32,
    pub title: String,
    #[serde(rename = "w")]
    pub width: u32,
    /// Compressed mxGraph fragment, see [`super::codec`].
    pub xml: String,
}

/// Title-case a string: a cased letter following an uncased character is
/// upper-cased, every other cased letter lower-cased.
///
/// Uncased letters (kana, CJK) act as word breaks.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_cased = false;
    for c in text.chars() {
        if after_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        after_cased = c.is_lowercase() || c.is_uppercase();
    }
    out
}

/// Display title for an icon file stem.
///
/// ```ignore
/// title_from_stem("10021-icon-service-Virtual_Machine") // "10021 Icon Service Virtual Machine"
/// ```
pub fn title_from_stem(stem: &str) -> String {
    title_case(&stem.replace(['-', '_'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_sorted_compact_keys() {
        let record = IconRecord {
            aspect: AspectPolicy::Fixed,
            height: 40,
            title: "Storage".to_string(),
            width: 80,
            xml: "abc".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"aspect":"fixed","h":40,"title":"Storage","w":80,"xml":"abc"}"#
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("virtual machine"), "Virtual Machine");
        assert_eq!(title_case("IoT HUB"), "Iot Hub");
        assert_eq!(title_case("x2y"), "X2Y");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case(""), "");
        // kana is uncased, so the next letter starts a word
        assert_eq!(title_case("aストb"), "AストB");
    }

    #[test]
    fn test_title_from_stem() {
        assert_eq!(
            title_from_stem("10021-icon-service-Virtual_Machine"),
            "10021 Icon Service Virtual Machine"
        );
        assert_eq!(title_from_stem("ストレージ_アカウント"), "ストレージ アカウント");
    }
}
