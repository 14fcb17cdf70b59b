//! Icon sources.
//!
//! Every source implements [`IconProvider`]: make the icons available on
//! disk (`retrieve`), split them into categories (`enumerate_categories`),
//! and clean up (`release`). The build command only talks to the trait.
//!
//! | Source          | Variant               |
//! |-----------------|-----------------------|
//! | directory       | [`DirectoryProvider`] |
//! | `.zip` archive  | [`ArchiveProvider`]   |

mod archive;
mod directory;

pub use archive::ArchiveProvider;
pub use directory::DirectoryProvider;

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::category::{self, Category, IconTree, InferError, LayoutKind, LayoutOptions};
use crate::config::ProviderConfig;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider `{0}` has not been retrieved")]
    NotRetrieved(String),

    #[error("source `{}` does not exist", .0.display())]
    MissingSource(PathBuf),

    #[error("IO error at `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("cannot read archive `{}`", .0.display())]
    Archive(PathBuf, #[source] zip::result::ZipError),

    #[error(transparent)]
    Infer(#[from] InferError),
}

/// Capability interface implemented by every icon source.
pub trait IconProvider {
    /// Stable identifier, used as the output subdirectory.
    fn id(&self) -> &str;

    /// Human-readable name for the manifest.
    fn display_name(&self) -> &str;

    /// Make the icons available locally; returns the tree root.
    fn retrieve(&mut self) -> Result<PathBuf, ProviderError>;

    /// Split the retrieved tree into categories.
    fn enumerate_categories(&self) -> Result<Vec<Category>, ProviderError>;

    /// Remove anything `retrieve` created.
    fn release(&mut self) -> Result<(), ProviderError>;
}

/// Settings shared by all provider variants.
#[derive(Debug, Clone)]
pub struct ProviderSpec {
    pub id: String,
    pub name: String,
    pub source: PathBuf,
    pub layout: LayoutKind,
    pub root_name: Option<String>,
    pub flat_name: Option<String>,
    pub extension: String,
}

impl ProviderSpec {
    pub fn from_config(config: &ProviderConfig, extension: &str) -> Self {
        Self {
            id: config.id.clone(),
            name: config.name.clone().unwrap_or_else(|| config.id.clone()),
            source: config.source.clone(),
            layout: config.layout,
            root_name: config.root_name.clone(),
            flat_name: config.flat_name.clone(),
            extension: extension.to_string(),
        }
    }

    fn layout_options(&self) -> LayoutOptions<'_> {
        LayoutOptions {
            kind: self.layout,
            root_name: self.root_name.as_deref(),
            single_name: self.flat_name.as_deref(),
        }
    }

    /// Scan `root` and split it with this spec's layout.
    fn categories_in(&self, root: &Path) -> Result<Vec<Category>, ProviderError> {
        let tree = IconTree::scan(root, &self.extension);
        Ok(category::categorize(&tree, &self.layout_options())?)
    }
}

/// Pick the variant for a source path: `.zip` files are archives,
/// everything else is a directory.
pub fn create_provider(spec: ProviderSpec, cache_dir: &Path) -> Box<dyn IconProvider> {
    let is_archive = spec
        .source
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"));

    if is_archive {
        Box::new(ArchiveProvider::new(spec, cache_dir))
    } else {
        Box::new(DirectoryProvider::new(spec))
    }
}
