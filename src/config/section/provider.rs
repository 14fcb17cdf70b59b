//! `[[provider]]` tables: one per icon source.
//!
//! ```toml
//! [[provider]]
//! id = "azure"                                          # output subdirectory
//! name = "Azure Architecture Icons"                     # manifest name (default: id)
//! source = "downloads/Azure_Public_Service_Icons.zip"   # directory or .zip
//! layout = "subdirs"                                    # inferred | subdirs | leaf
//! root_name = "Icons"                                   # subdirs only
//! flat_name = "Azure"                                   # name for whole-tree categories
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::category::LayoutKind;
use crate::config::ConfigDiagnostics;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub id: String,
    pub name: Option<String>,
    pub source: PathBuf,
    pub layout: LayoutKind,
    pub root_name: Option<String>,
    pub flat_name: Option<String>,
}

/// Check ids, sources and layout options of every provider.
pub fn validate_providers(providers: &[ProviderConfig], diag: &mut ConfigDiagnostics) {
    let mut seen = HashSet::new();

    for (i, provider) in providers.iter().enumerate() {
        let field = |name: &str| format!("provider[{i}].{name}");
        let id = provider.id.trim();

        if id.is_empty() {
            diag.error_with_hint(field("id"), "must not be empty", "use a short name like `azure`");
        } else if id.contains(['/', '\\']) || id == "." || id == ".." {
            diag.error(field("id"), format!("`{id}` cannot be used as a directory name"));
        } else if !seen.insert(id) {
            diag.error(field("id"), format!("duplicate provider id `{id}`"));
        }

        if provider.source.as_os_str().is_empty() {
            diag.error(field("source"), "must not be empty");
        }

        if provider.root_name.is_some() && provider.layout != LayoutKind::Subdirs {
            diag.error_with_hint(
                field("root_name"),
                "only used with the `subdirs` layout",
                "set `layout = \"subdirs\"` or remove `root_name`",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_parse_providers() {
        let config = test_parse_config(
            r#"
[[provider]]
id = "azure"
name = "Azure Architecture Icons"
source = "downloads/azure.zip"
layout = "subdirs"
root_name = "Icons"

[[provider]]
id = "fabric"
source = "fabric"
"#,
        );
        assert_eq!(config.providers.len(), 2);
        let azure = &config.providers[0];
        assert_eq!(azure.layout, LayoutKind::Subdirs);
        assert_eq!(azure.root_name.as_deref(), Some("Icons"));
        let fabric = &config.providers[1];
        assert_eq!(fabric.name, None);
        assert_eq!(fabric.layout, LayoutKind::Inferred);
    }

    #[test]
    fn test_validate_providers() {
        let provider = |id: &str| ProviderConfig {
            id: id.to_string(),
            source: PathBuf::from("icons"),
            ..Default::default()
        };
        let providers = vec![
            provider("azure"),
            provider("azure"),
            provider(""),
            provider("a/b"),
            ProviderConfig {
                root_name: Some("Icons".to_string()),
                ..provider("leafy")
            },
            ProviderConfig {
                source: PathBuf::new(),
                ..provider("nosrc")
            },
        ];

        let mut diag = ConfigDiagnostics::new();
        validate_providers(&providers, &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "provider[1].id",
                "provider[2].id",
                "provider[3].id",
                "provider[4].root_name",
                "provider[5].source",
            ]
        );
    }
}
