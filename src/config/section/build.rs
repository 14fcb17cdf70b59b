//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "output"       # Library files and index.json (relative to config dir)
//! cache = "temp"          # Archive extraction directory (relative to config dir)
//! max_size = 80           # Largest side of an icon in the library, in px
//! extension = "svg"       # Icon file extension
//! clean = false           # Remove the cache directory after the run
//!
//! [build.slug]
//! mode = "safe"           # safe | ascii
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::ConfigDiagnostics;
use crate::icon::DEFAULT_MAX_SIZE;
use crate::library::SlugMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub output: PathBuf,
    pub cache: PathBuf,
    pub max_size: u32,
    pub extension: String,
    pub clean: bool,
    pub slug: SlugConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "output".into(),
            cache: "temp".into(),
            max_size: DEFAULT_MAX_SIZE,
            extension: "svg".to_string(),
            clean: false,
            slug: SlugConfig::default(),
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.max_size == 0 {
            diag.error("build.max_size", "must be greater than 0");
        }
        if self.extension.trim().is_empty() {
            diag.error_with_hint(
                "build.extension",
                "must not be empty",
                "use `extension = \"svg\"`",
            );
        }
    }

    /// Extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.extension.trim().trim_start_matches('.')
    }
}

/// `[build.slug]`: library file names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    pub mode: SlugMode,
}
