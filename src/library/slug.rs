//! File names for category libraries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Slug used when nothing of the category name survives.
pub const FALLBACK_SLUG: &str = "icons";

/// How non-ASCII letters are treated in file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Keep Unicode letters and digits (default).
    #[default]
    Safe,
    /// Transliterate to ASCII first (`Café` → `cafe`).
    Ascii,
}

/// Turn a category name into a file stem.
///
/// Lowercase, `+` → `and`, whitespace → `-`, anything else that is not
/// alphanumeric dropped, hyphen runs collapsed and trimmed. Never empty.
pub fn slugify(name: &str, mode: SlugMode) -> String {
    let source = match mode {
        SlugMode::Safe => name.to_string(),
        SlugMode::Ascii => deunicode::deunicode(name),
    };

    let mut slug = String::with_capacity(source.len());
    for c in source.to_lowercase().chars() {
        if c == '+' {
            slug.push_str("and");
        } else if c.is_whitespace() || c == '-' {
            if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        } else if c.is_alphanumeric() {
            slug.push(c);
        }
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out unique slugs within one output directory.
#[derive(Debug, Default)]
pub struct SlugAllocator {
    mode: SlugMode,
    taken: HashSet<String>,
}

impl SlugAllocator {
    pub fn new(mode: SlugMode) -> Self {
        Self {
            mode,
            taken: HashSet::new(),
        }
    }

    /// Slug for `name`, suffixed `-2`, `-3`, ... if already handed out.
    pub fn allocate(&mut self, name: &str) -> String {
        let base = slugify(name, self.mode);
        let mut candidate = base.clone();
        let mut n = 2;
        while self.taken.contains(&candidate) {
            candidate = format!("{base}-{n}");
            n += 1;
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
