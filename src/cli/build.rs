//! Library building orchestration.
//!
//! Per provider:
//! - **Retrieve** - make the icons available on disk (extract archives)
//! - **Enumerate** - split the tree into categories
//! - **Convert** - parallel icon conversion, one library file per category
//! - **Release** - with `clean`, remove anything retrieve created
//!
//! Then the manifest is written and, with `clean`, the cache removed.
//! Without `clean` archive extractions stay in the cache for the next run.
//! A failing provider is logged and skipped; the run only fails when no
//! provider produced a library file.

use crate::{
    category::Category,
    config::IconlibConfig,
    debug,
    library::{self, SlugAllocator},
    log,
    logger::ProgressLine,
    manifest::{Manifest, ProviderSummary, manifest_path},
    provider::{IconProvider, ProviderSpec, create_provider},
    utils::plural::{plural_count, plural_count_with},
};
use anyhow::{Context, Result, bail};
use std::{fs, path::PathBuf};

/// Build every configured provider and write the manifest.
pub fn build_libraries(config: &IconlibConfig) -> Result<Manifest> {
    let build = &config.build;
    let mut manifest = Manifest::new();

    log!(
        "build";
        "{} -> {}",
        plural_count(config.providers.len(), "provider"),
        build.output.display()
    );

    for provider_config in &config.providers {
        let spec = ProviderSpec::from_config(provider_config, build.extension());
        let mut provider = create_provider(spec, &build.cache);

        match build_provider(provider.as_mut(), config) {
            Ok(Some(summary)) => {
                log!(
                    "done";
                    "{}: {} in {}",
                    provider.id(),
                    plural_count(summary.total_icons, "icon"),
                    plural_count(summary.categories.len(), "file")
                );
                manifest.insert(provider.id(), summary);
            }
            Ok(None) => log!("warn"; "{}: no icons could be converted", provider.id()),
            Err(e) => log!("error"; "{}: {:#}", provider.id(), e),
        }

        if build.clean
            && let Err(e) = provider.release()
        {
            log!("warn"; "{}: release failed: {}", provider.id(), e);
        }
    }

    if build.clean {
        clean_cache(config)?;
    }

    if manifest.is_empty() {
        bail!("no library files were produced");
    }

    let path = manifest.write(&build.output)?;
    log!(
        "manifest";
        "{} ({}, {})",
        path.display(),
        plural_count(manifest.total_files(), "file"),
        plural_count(manifest.total_icons(), "icon")
    );

    Ok(manifest)
}

/// Retrieve, enumerate and convert one provider.
///
/// Returns `None` when every category came out empty.
fn build_provider(
    provider: &mut dyn IconProvider,
    config: &IconlibConfig,
) -> Result<Option<ProviderSummary>> {
    let root = provider
        .retrieve()
        .with_context(|| format!("failed to retrieve `{}`", provider.id()))?;
    debug!("build"; "{}: icons at {}", provider.id(), root.display());

    let categories = provider.enumerate_categories()?;
    log!(
        "build";
        "{}: {}",
        provider.id(),
        plural_count_with(categories.len(), "category", "categories")
    );

    let out_dir = config.build.output.join(provider.id());
    let mut slugs = SlugAllocator::new(config.build.slug.mode);
    let mut files = Vec::new();
    let mut total_icons = 0;

    for category in &categories {
        let Some((path, count)) = build_category(provider.id(), category, config, &mut slugs, &out_dir)?
        else {
            continue;
        };
        files.push(manifest_path(&config.build.output, &path));
        total_icons += count;
    }

    if files.is_empty() {
        return Ok(None);
    }

    Ok(Some(ProviderSummary {
        name: provider.display_name().to_string(),
        categories: files,
        total_icons,
    }))
}

/// Convert one category and write its library file.
///
/// Returns the written path and record count, or `None` if nothing converted.
fn build_category(
    label: &str,
    category: &Category,
    config: &IconlibConfig,
    slugs: &mut SlugAllocator,
    out_dir: &std::path::Path,
) -> Result<Option<(PathBuf, usize)>> {
    let progress = ProgressLine::new(label, &[("icons", category.files.len())]);
    let outcome =
        library::convert_category_with(category, config.build.max_size, |_| progress.inc("icons"));
    progress.finish();

    let failed = outcome.failures.len();
    let Some(document) = outcome.into_document() else {
        log!("warn"; "{}: every icon failed, skipped", category.name);
        return Ok(None);
    };

    let path = out_dir.join(format!("{}.xml", slugs.allocate(&category.name)));
    document.write_to(&path)?;

    if failed > 0 {
        log!(
            "build";
            "{} -> {} ({} skipped)",
            category.name,
            path.display(),
            failed
        );
    } else {
        debug!("build"; "{} -> {}", category.name, path.display());
    }

    Ok(Some((path, document.len())))
}

/// Remove the cache directory (extracted archives).
fn clean_cache(config: &IconlibConfig) -> Result<()> {
    let cache = &config.build.cache;
    if cache.exists() {
        fs::remove_dir_all(cache)
            .with_context(|| format!("Failed to remove cache {}", cache.display()))?;
        debug!("build"; "removed cache {}", cache.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;
    use crate::icon::codec;
    use crate::manifest::MANIFEST_FILE;
    use std::io::Write;
    use std::path::Path;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config(dir: &Path, providers: Vec<ProviderConfig>) -> IconlibConfig {
        let mut config = IconlibConfig::default();
        config.root = dir.to_path_buf();
        config.build.output = dir.join("output");
        config.build.cache = dir.join("temp");
        config.providers = providers;
        config
    }

    fn provider(id: &str, source: PathBuf) -> ProviderConfig {
        ProviderConfig {
            id: id.to_string(),
            source,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_directory_provider() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("azure");
        touch(&icons, "Compute/vm.svg", r#"<svg width="160" height="80"/>"#);
        touch(&icons, "Compute/vm-scale-set.svg", "<svg/>");
        touch(&icons, "AI + ML/bot.svg", "<svg/>");

        let config = config(dir.path(), vec![provider("azure", icons.clone())]);
        let manifest = build_libraries(&config).unwrap();

        let summary = manifest.get("azure").unwrap();
        assert_eq!(summary.name, "azure");
        assert_eq!(summary.total_icons, 3);
        assert_eq!(
            summary.categories,
            vec!["output/azure/ai-and-ml.xml", "output/azure/compute.xml"]
        );

        let xml = fs::read_to_string(dir.path().join("output/azure/compute.xml")).unwrap();
        // `vm-scale-set.svg` sorts before `vm.svg`
        assert!(xml.starts_with(
            "<mxlibrary>[{\"aspect\":\"fixed\",\"h\":48,\"title\":\"Vm Scale Set\",\"w\":48,"
        ));

        let marker = "\"title\":\"Vm\",\"w\":80,\"xml\":\"";
        let blob = xml.split(marker).nth(1).unwrap().split('"').next().unwrap();
        assert!(codec::decode(blob).unwrap().contains("width=\"80\" height=\"40\""));

        assert!(dir.path().join("output").join(MANIFEST_FILE).is_file());
        // directory sources are never removed
        assert!(icons.join("Compute/vm.svg").exists());
    }

    #[test]
    fn test_build_archive_provider_and_clean() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("fabric.zip");
        let mut zip = zip::ZipWriter::new(fs::File::create(&archive).unwrap());
        for name in ["fabric/a.svg", "fabric/b.svg"] {
            zip.start_file(name, zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"<svg/>").unwrap();
        }
        zip.finish().unwrap();

        let mut config = config(dir.path(), vec![provider("fabric", archive)]);
        config.build.clean = true;
        let manifest = build_libraries(&config).unwrap();

        assert_eq!(manifest.get("fabric").unwrap().total_icons, 2);
        assert_eq!(
            manifest.get("fabric").unwrap().categories,
            vec!["output/fabric/fabric.xml"]
        );
        assert!(!dir.path().join("temp").exists());
    }

    #[test]
    fn test_archive_extraction_reused_without_clean() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("fabric.zip");
        let mut zip = zip::ZipWriter::new(fs::File::create(&archive).unwrap());
        zip.start_file("a.svg", zip::write::SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<svg/>").unwrap();
        zip.finish().unwrap();

        let config = config(dir.path(), vec![provider("fabric", archive.clone())]);
        build_libraries(&config).unwrap();
        let extracted = dir.path().join("temp/fabric_icons/a.svg");
        assert!(extracted.is_file());

        // second run works from the cache alone
        fs::remove_file(&archive).unwrap();
        let manifest = build_libraries(&config).unwrap();
        assert_eq!(manifest.get("fabric").unwrap().total_icons, 1);
        assert!(extracted.is_file());
    }

    #[test]
    fn test_failing_provider_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("good");
        touch(&icons, "x.svg", "<svg/>");

        let config = config(
            dir.path(),
            vec![
                provider("missing", dir.path().join("nope")),
                provider("good", icons),
            ],
        );
        let manifest = build_libraries(&config).unwrap();
        assert!(manifest.get("missing").is_none());
        assert_eq!(manifest.get("good").unwrap().total_icons, 1);
    }

    #[test]
    fn test_no_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        let config = config(dir.path(), vec![provider("empty", empty)]);
        assert!(build_libraries(&config).is_err());
        assert!(!dir.path().join("output").join(MANIFEST_FILE).exists());
    }

    #[test]
    fn test_colliding_slugs_are_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let icons = dir.path().join("set");
        touch(&icons, "Web + Mobile/a.svg", "<svg/>");
        touch(&icons, "web and mobile/b.svg", "<svg/>");

        let config = config(dir.path(), vec![provider("set", icons)]);
        let manifest = build_libraries(&config).unwrap();
        assert_eq!(
            manifest.get("set").unwrap().categories,
            vec!["output/set/web-and-mobile.xml", "output/set/web-and-mobile-2.xml"]
        );
    }
}
