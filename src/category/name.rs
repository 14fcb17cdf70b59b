//! Display names for categories.

use std::path::{Component, Path};

/// Separator between path components in a category name.
pub const NAME_SEPARATOR: &str = " / ";

/// Normalize one directory name for display.
///
/// `_` and `-` become spaces, whitespace runs collapse, and the first
/// letter of every word is capitalized. The rest of each word is kept, so
/// acronyms like `IoT` survive.
pub fn display_name(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name a category after its directory's path relative to `grouping_root`.
///
/// Returns `None` when `dir` is the grouping root itself (or outside it).
pub fn relative_name(grouping_root: &Path, dir: &Path) -> Option<String> {
    let rel = dir.strip_prefix(grouping_root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(display_name(&part.to_string_lossy())),
            _ => None,
        })
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(NAME_SEPARATOR))
    }
}

/// Name a directory after its own last component.
pub fn dir_name(dir: &Path) -> Option<String> {
    let name = display_name(&dir.file_name()?.to_string_lossy());
    (!name.is_empty()).then_some(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
