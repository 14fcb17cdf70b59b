//! Grouping granularity inference.
//!
//! Given the directories that directly hold icons, decide whether the set is
//! one flat category or one category per meaningful subdirectory. Vendor
//! archives come in three shapes and the caller does not say which:
//!
//! ```text
//! flat             one level              two+ levels
//! root/            root/                  root/
//! ├── a.svg        ├── Compute/           └── Org/
//! └── b.svg        │   └── vm.svg             ├── Blue/
//!                  └── Storage/               │   └── a.svg
//!                      └── disk.svg           └── Purple/
//!                                                 └── a.svg
//! ```
//!
//! The first depth (relative to the root) at which leaves diverge into more
//! than one ancestor is the grouping level.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InferError {
    #[error("no icon files found under `{}`", .0.display())]
    NoIcons(PathBuf),
}

/// Category boundaries chosen for a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Every icon sits in one directory.
    Flat { dir: PathBuf },
    /// One category per `groups` entry, each including its nested icons.
    ///
    /// `loose` lists the directories from the tree root down to `root`
    /// that directly hold icons; together they form one extra category.
    Grouped {
        root: PathBuf,
        groups: Vec<PathBuf>,
        loose: Vec<PathBuf>,
    },
    /// Leaves never diverge (a single nested chain): the whole tree is one
    /// category.
    Whole { root: PathBuf },
}

/// Infer the layout of `leaf_dirs` under `root`.
///
/// Pure: only path arithmetic, no filesystem access. Leaves outside `root`
/// are treated as if they sat directly in it.
pub fn infer_layout(root: &Path, leaf_dirs: &BTreeSet<PathBuf>) -> Result<Layout, InferError> {
    match leaf_dirs.len() {
        0 => return Err(InferError::NoIcons(root.to_path_buf())),
        1 => {
            let dir = leaf_dirs.iter().next().cloned().unwrap_or_default();
            return Ok(Layout::Flat { dir });
        }
        _ => {}
    }

    let relative: Vec<Vec<&Path>> = leaf_dirs
        .iter()
        .map(|leaf| relative_components(root, leaf))
        .collect();
    let deepest = relative.iter().map(Vec::len).max().unwrap_or(0);

    for depth in 0..deepest {
        let ancestors: BTreeSet<PathBuf> = relative
            .iter()
            .filter(|parts| parts.len() > depth)
            .map(|parts| join_under(root, &parts[..=depth]))
            .collect();

        if ancestors.len() > 1 {
            let grouping_root = if depth == 0 {
                root.to_path_buf()
            } else {
                join_under(root, &relative_prefix(&relative, depth))
            };
            // a leaf no deeper than the grouping root lies on the shared chain
            let loose = leaf_dirs
                .iter()
                .zip(&relative)
                .filter(|(_, parts)| parts.len() <= depth)
                .map(|(leaf, _)| leaf.clone())
                .collect();
            return Ok(Layout::Grouped {
                root: grouping_root,
                groups: ancestors.into_iter().collect(),
                loose,
            });
        }
    }

    Ok(Layout::Whole {
        root: root.to_path_buf(),
    })
}

/// Path components of `leaf` below `root`.
fn relative_components<'a>(root: &Path, leaf: &'a Path) -> Vec<&'a Path> {
    leaf.strip_prefix(root)
        .map(|rel| {
            rel.components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(Path::new(part)),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// The single shared prefix of length `depth`.
///
/// Only called once every shallower depth produced one ancestor, so any
/// leaf at least `depth + 1` deep carries it.
fn relative_prefix<'a>(relative: &[Vec<&'a Path>], depth: usize) -> Vec<&'a Path> {
    relative
        .iter()
        .find(|parts| parts.len() > depth)
        .map(|parts| parts[..depth].to_vec())
        .unwrap_or_default()
}

fn join_under(root: &Path, parts: &[&Path]) -> PathBuf {
    let mut path = root.to_path_buf();
    path.extend(parts);
    path
}
