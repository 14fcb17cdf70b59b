//! Category discovery for icon trees.
//!
//! # Modules
//!
//! - [`tree`]: read-only view of directories and the icons they hold
//! - [`infer`]: depth-based grouping inference (pure)
//! - [`name`]: display names from directory paths
//!
//! # Layouts
//!
//! | Kind       | Categories                                          |
//! |------------|-----------------------------------------------------|
//! | `inferred` | chosen by [`infer::infer_layout`]                   |
//! | `subdirs`  | each child of a named root directory (e.g. `Icons`) |
//! | `leaf`     | every directory that directly holds icons           |

pub mod infer;
pub mod name;
pub mod tree;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use infer::{InferError, Layout, infer_layout};
pub use tree::IconTree;

/// Name used when neither configuration nor the directory provide one.
pub const DEFAULT_CATEGORY_NAME: &str = "Icons";

/// A named, non-empty group of icons destined for one library file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub files: Vec<PathBuf>,
}

impl Category {
    pub fn new(name: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }
}

/// How a provider splits its tree into categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Infer flat vs. nested from the tree shape.
    #[default]
    Inferred,
    /// Each child directory of a named root is a category.
    Subdirs,
    /// Each directory holding icons is a category.
    Leaf,
}

/// Options for [`categorize`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutOptions<'a> {
    pub kind: LayoutKind,
    /// Directory name to search for with [`LayoutKind::Subdirs`].
    pub root_name: Option<&'a str>,
    /// Name for a category that spans a whole directory (flat trees,
    /// single-chain trees, icons loose above the groups).
    pub single_name: Option<&'a str>,
}

/// Split `tree` into categories, sorted by directory path.
///
/// Fails only when the tree holds no icons at all.
pub fn categorize(tree: &IconTree, options: &LayoutOptions<'_>) -> Result<Vec<Category>, InferError> {
    if tree.is_empty() {
        return Err(InferError::NoIcons(tree.root().to_path_buf()));
    }

    let categories = match options.kind {
        LayoutKind::Inferred => inferred(tree, options)?,
        LayoutKind::Subdirs => {
            let root = options
                .root_name
                .and_then(|name| tree.find_dir_named(name))
                .unwrap_or_else(|| tree.root().to_path_buf());
            let loose = [root.clone()];
            grouped(tree, &root, &loose, &tree.child_dirs(&root), options)
        }
        LayoutKind::Leaf => tree
            .leaf_dirs()
            .into_iter()
            .map(|dir| {
                let name = name::relative_name(tree.root(), &dir)
                    .unwrap_or_else(|| whole_name(&dir, options));
                Category::new(name, tree.direct_files(&dir).to_vec())
            })
            .collect(),
    };

    Ok(categories
        .into_iter()
        .filter(|c| !c.files.is_empty())
        .collect())
}

fn inferred(tree: &IconTree, options: &LayoutOptions<'_>) -> Result<Vec<Category>, InferError> {
    let categories = match infer_layout(tree.root(), &tree.leaf_dirs())? {
        Layout::Flat { dir } => {
            vec![Category::new(whole_name(&dir, options), tree.files_under(&dir))]
        }
        Layout::Whole { root } => {
            vec![Category::new(whole_name(&root, options), tree.files_under(&root))]
        }
        Layout::Grouped {
            root,
            groups,
            loose,
        } => grouped(tree, &root, &loose, &groups, options),
    };
    Ok(categories)
}

/// One category per group, plus one named after `root` for the icons
/// directly in the `loose` directories, if any.
fn grouped(
    tree: &IconTree,
    root: &Path,
    loose: &[PathBuf],
    groups: &[PathBuf],
    options: &LayoutOptions<'_>,
) -> Vec<Category> {
    let mut categories = Vec::with_capacity(groups.len() + 1);

    let mut loose_files: Vec<PathBuf> = loose
        .iter()
        .flat_map(|dir| tree.direct_files(dir).iter().cloned())
        .collect();
    if !loose_files.is_empty() {
        loose_files.sort();
        categories.push(Category::new(whole_name(root, options), loose_files));
    }

    categories.extend(groups.iter().map(|group| {
        let name = name::relative_name(root, group).unwrap_or_else(|| whole_name(group, options));
        Category::new(name, tree.files_under(group))
    }));
    categories
}

fn whole_name(dir: &Path, options: &LayoutOptions<'_>) -> String {
    options
        .single_name
        .map(str::to_string)
        .or_else(|| name::dir_name(dir))
        .unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string())
}
