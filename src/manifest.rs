//! `index.json`: what a run produced, per provider.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "index.json";

/// Summary of one provider's output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderSummary {
    /// Human-readable provider name.
    pub name: String,
    /// Library files, relative to the output directory's parent.
    pub categories: Vec<String>,
    pub total_icons: usize,
}

/// Provider id → summary, written once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    providers: BTreeMap<String, ProviderSummary>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, summary: ProviderSummary) {
        self.providers.insert(id.into(), summary);
    }

    #[allow(dead_code)]
    pub fn get(&self, id: &str) -> Option<&ProviderSummary> {
        self.providers.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn total_icons(&self) -> usize {
        self.providers.values().map(|p| p.total_icons).sum()
    }

    pub fn total_files(&self) -> usize {
        self.providers.values().map(|p| p.categories.len()).sum()
    }

    /// Pretty JSON (2-space indent).
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest")
    }

    /// Write `index.json` into `output_dir`, returning its path.
    pub fn write(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(MANIFEST_FILE);
        fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;
        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}

/// Path of `file` as listed in the manifest: relative to the parent of the
/// output directory, `/`-separated.
pub fn manifest_path(output_dir: &Path, file: &Path) -> String {
    let base = output_dir.parent().unwrap_or(output_dir);
    let rel = file.strip_prefix(base).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_json_layout() {
        let mut manifest = Manifest::new();
        manifest.insert(
            "fabric",
            ProviderSummary {
                name: "Microsoft Fabric Icons".to_string(),
                categories: vec!["output/fabric/fabric-icons.xml".to_string()],
                total_icons: 12,
            },
        );
        manifest.insert("azure", ProviderSummary::default());

        let json = manifest.to_json().unwrap();
        assert!(json.starts_with("{\n  \"azure\": {"));
        assert!(json.contains("\"total_icons\": 12"));
        assert_eq!(manifest.total_icons(), 12);
        assert_eq!(manifest.total_files(), 1);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");

        let mut manifest = Manifest::new();
        manifest.insert(
            "azure",
            ProviderSummary {
                name: "Azure".to_string(),
                categories: vec!["output/azure/compute.xml".to_string()],
                total_icons: 3,
            },
        );
        let path = manifest.write(&output).unwrap();
        assert_eq!(path, output.join(MANIFEST_FILE));

        let parsed: Manifest = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(parsed, manifest);
        assert_eq!(parsed.get("azure").unwrap().total_icons, 3);
    }

    #[test]
    fn test_manifest_path() {
        let output = Path::new("/work/output");
        assert_eq!(
            manifest_path(output, Path::new("/work/output/azure/compute.xml")),
            "output/azure/compute.xml"
        );
        assert_eq!(
            manifest_path(Path::new("output"), Path::new("output/azure/x.xml")),
            "output/azure/x.xml"
        );
    }
}
