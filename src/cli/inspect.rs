//! Dry run of category discovery: what would `build` produce for a
//! directory, without converting anything.

use crate::{
    category::{self, Category, IconTree, LayoutOptions},
    config::IconlibConfig,
    library::SlugAllocator,
    log,
    utils::plural::{plural_count, plural_count_with},
};
use anyhow::{Context, Result, bail};
use owo_colors::{OwoColorize, Stream};

use super::InspectArgs;

/// Run `iconlib inspect`.
pub fn inspect_dir(args: &InspectArgs, config: &IconlibConfig) -> Result<Vec<Category>> {
    if !args.dir.is_dir() {
        bail!("`{}` is not a directory", args.dir.display());
    }

    let tree = IconTree::scan(&args.dir, config.build.extension());
    let options = LayoutOptions {
        kind: args.layout,
        root_name: args.root_name.as_deref(),
        single_name: None,
    };
    let categories = category::categorize(&tree, &options)
        .with_context(|| format!("cannot split `{}` into categories", args.dir.display()))?;

    let mut slugs = SlugAllocator::new(config.build.slug.mode);
    for category in &categories {
        let slug = slugs.allocate(&category.name);
        let count = format!("({})", category.files.len());
        let target = format!("-> {slug}.xml");
        println!(
            "{} {} {}",
            category.name.if_supports_color(Stream::Stdout, |t| t.bold()),
            count.if_supports_color(Stream::Stdout, |t| t.dimmed()),
            target.if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
        if args.files {
            for file in &category.files {
                let rel = file.strip_prefix(&args.dir).unwrap_or(file);
                println!("  {}", rel.display());
            }
        }
    }

    log!(
        "inspect";
        "{} in {}",
        plural_count(tree.icon_count(), "icon"),
        plural_count_with(categories.len(), "category", "categories")
    );
    Ok(categories)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::LayoutKind;
    use std::fs;
    use std::path::Path;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<svg/>").unwrap();
    }

    fn args(dir: &Path, layout: LayoutKind, root_name: Option<&str>) -> InspectArgs {
        InspectArgs {
            dir: dir.to_path_buf(),
            layout,
            root_name: root_name.map(str::to_string),
            files: true,
        }
    }

    #[test]
    fn test_inspect_layouts() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Azure/Icons/compute/vm.svg");
        touch(dir.path(), "Azure/Icons/compute/gpu/vm-gpu.svg");
        touch(dir.path(), "Azure/Icons/storage/disk.svg");

        let config = IconlibConfig::default();
        let names = |categories: Vec<Category>| -> Vec<(String, usize)> {
            categories
                .into_iter()
                .map(|c| (c.name, c.files.len()))
                .collect()
        };

        let inferred = inspect_dir(&args(dir.path(), LayoutKind::Inferred, None), &config).unwrap();
        assert_eq!(
            names(inferred),
            vec![("Compute".to_string(), 2), ("Storage".to_string(), 1)]
        );

        let subdirs =
            inspect_dir(&args(dir.path(), LayoutKind::Subdirs, Some("Icons")), &config).unwrap();
        assert_eq!(
            names(subdirs),
            vec![("Compute".to_string(), 2), ("Storage".to_string(), 1)]
        );

        let leaf = inspect_dir(&args(dir.path(), LayoutKind::Leaf, None), &config).unwrap();
        assert_eq!(
            names(leaf),
            vec![
                ("Azure / Icons / Compute".to_string(), 1),
                ("Azure / Icons / Compute / Gpu".to_string(), 1),
                ("Azure / Icons / Storage".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_inspect_empty_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = IconlibConfig::default();
        assert!(inspect_dir(&args(dir.path(), LayoutKind::Inferred, None), &config).is_err());
    }
}
