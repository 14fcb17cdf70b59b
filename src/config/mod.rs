//! Configuration management for `iconlib.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build] and [build.slug]
//! │   └── provider   # [[provider]]
//! ├── types/         # ConfigError, ConfigDiagnostics
//! ├── util.rs        # find_config_file
//! └── mod.rs         # IconlibConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                        |
//! |-----------------|------------------------------------------------|
//! | `[build]`       | Output/cache paths, max icon size, extension   |
//! | `[build.slug]`  | Library file naming                            |
//! | `[[provider]]`  | Icon sources, one table each                   |
//!
//! Every field has a default; an empty file is a valid config. Only
//! `build` needs a file, since it has nothing to do without providers.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{BuildConfig, ProviderConfig};
pub use types::{ConfigDiagnostics, ConfigError};

use crate::cli::{BuildArgs, Cli, Commands};
use crate::log;
use crate::utils::path::normalize_path;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconlib.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconlibConfig {
    /// Absolute path to the config file, if one was found (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default, rename = "provider")]
    pub providers: Vec<ProviderConfig>,
}

impl IconlibConfig {
    /// Load configuration for the given command line.
    ///
    /// Searches upward from cwd for the config file. The root is the config
    /// file's parent directory, or cwd when no file is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(normalize_path)
                    .unwrap_or_else(|| cwd.clone());
                config.config_path = Some(normalize_path(&path));
                config
            }
            None if cli.is_build() => {
                log!(
                    "error";
                    "config file '{}' not found; `build` needs at least one [[provider]]",
                    cli.config.display()
                );
                bail!(ConfigError::Validation("config file not found".into()));
            }
            None => Self {
                root: cwd,
                ..Self::default()
            },
        };

        config.apply_command_options(cli)?;
        config.normalize_paths();
        config.validate(cli.is_build())?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warn"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) -> Result<()> {
        match &cli.command {
            Commands::Build { args } => self.apply_build_args(args)?,
            Commands::Convert { args } => {
                Self::update_option(&mut self.build.max_size, args.max_size.as_ref());
            }
            Commands::Inspect { .. } => {}
        }
        Ok(())
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) -> Result<()> {
        Self::update_option(&mut self.build.output, args.output.as_ref());
        Self::update_option(&mut self.build.cache, args.cache.as_ref());
        Self::update_option(&mut self.build.max_size, args.max_size.as_ref());
        self.build.clean |= args.clean;
        self.select_providers(&args.provider)
    }

    /// Keep only the providers named on the command line (all if none).
    fn select_providers(&mut self, ids: &[String]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }
        if let Some(unknown) = ids
            .iter()
            .find(|id| !self.providers.iter().any(|p| &p.id == *id))
        {
            bail!(ConfigError::Validation(format!(
                "unknown provider `{unknown}`"
            )));
        }
        self.providers.retain(|p| ids.contains(&p.id));
        Ok(())
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve output, cache and provider sources against the root.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        self.build.output = root.join(&self.build.output);
        self.build.cache = root.join(&self.build.cache);
        for provider in &mut self.providers {
            provider.source = root.join(&provider.source);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors before reporting.
    pub fn validate(&self, needs_providers: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.build.validate(&mut diag);
        section::validate_providers(&self.providers, &mut diag);
        if needs_providers && self.providers.is_empty() {
            diag.error_with_hint(
                "provider",
                "no providers configured",
                "add a [[provider]] table with `id` and `source`",
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config and panic on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> IconlibConfig {
    let (parsed, ignored) = IconlibConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
