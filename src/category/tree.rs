//! Read-only view of the icon files under a root.

use jwalk::WalkDir;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

const IGNORED_DIRS: &[&str] = &["__MACOSX"];

/// Icon files grouped by the directory that directly contains them.
#[derive(Debug, Clone, Default)]
pub struct IconTree {
    root: PathBuf,
    leaves: BTreeMap<PathBuf, Vec<PathBuf>>,
}

impl IconTree {
    /// Walk `root` recursively and collect files with `extension`
    /// (case-insensitive). Unreadable entries, hidden files and archive
    /// metadata directories are skipped.
    pub fn scan(root: &Path, extension: &str) -> Self {
        let files = WalkDir::new(root)
            .sort(true)
            .skip_hidden(false)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|path| has_extension(path, extension) && !is_ignored(root, path));
        Self::from_files(root, files)
    }

    /// Like [`IconTree::scan`] but only for files directly in `root`.
    pub fn scan_shallow(root: &Path, extension: &str) -> Self {
        let files = WalkDir::new(root)
            .sort(true)
            .skip_hidden(false)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path())
            .filter(|path| has_extension(path, extension) && !is_ignored(root, path));
        Self::from_files(root, files)
    }

    /// Build from an explicit file list. Files outside `root` are ignored.
    pub fn from_files(root: &Path, files: impl IntoIterator<Item = PathBuf>) -> Self {
        let mut leaves: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
        for file in files {
            if !file.starts_with(root) {
                continue;
            }
            if let Some(parent) = file.parent() {
                leaves.entry(parent.to_path_buf()).or_default().push(file);
            }
        }
        for files in leaves.values_mut() {
            files.sort();
        }
        Self {
            root: root.to_path_buf(),
            leaves,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directories that directly contain at least one icon.
    pub fn leaf_dirs(&self) -> BTreeSet<PathBuf> {
        self.leaves.keys().cloned().collect()
    }

    pub fn icon_count(&self) -> usize {
        self.leaves.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Icons directly inside `dir` (not recursive).
    pub fn direct_files(&self, dir: &Path) -> &[PathBuf] {
        self.leaves.get(dir).map(Vec::as_slice).unwrap_or_default()
    }

    /// Icons anywhere below `dir`, sorted by path.
    pub fn files_under(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = self
            .leaves
            .iter()
            .filter(|(leaf, _)| leaf.starts_with(dir))
            .flat_map(|(_, files)| files.iter().cloned())
            .collect();
        files.sort();
        files
    }

    /// Immediate subdirectories of `dir` that hold icons somewhere below.
    pub fn child_dirs(&self, dir: &Path) -> Vec<PathBuf> {
        let children: BTreeSet<PathBuf> = self
            .leaves
            .keys()
            .filter_map(|leaf| {
                let rel = leaf.strip_prefix(dir).ok()?;
                let first = rel.components().next()?;
                Some(dir.join(first))
            })
            .collect();
        children.into_iter().collect()
    }

    /// Shallowest directory named `name` on the way to any icon; ties go to
    /// the smallest path.
    pub fn find_dir_named(&self, name: &str) -> Option<PathBuf> {
        self.leaves
            .keys()
            .filter_map(|leaf| {
                leaf.ancestors()
                    .take_while(|a| a.starts_with(&self.root) && *a != self.root.as_path())
                    .filter(|a| a.file_name().is_some_and(|n| n == name))
                    .last()
                    .map(Path::to_path_buf)
            })
            .min_by(|a, b| {
                let depth = |p: &Path| p.components().count();
                depth(a).cmp(&depth(b)).then_with(|| a.cmp(b))
            })
    }
}

/// Hidden entries or `__MACOSX` anywhere below `root`.
fn is_ignored(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components().any(|c| {
        let name = c.as_os_str().to_string_lossy();
        name.starts_with('.') || IGNORED_DIRS.contains(&name.as_ref())
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}
