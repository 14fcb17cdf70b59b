//! Single-folder conversion: every icon directly in a folder into one
//! library file.

use crate::{
    category::{Category, DEFAULT_CATEGORY_NAME, IconTree, name},
    config::IconlibConfig,
    library::{self, LibraryDocument},
    log,
    logger::ProgressLine,
    utils::plural::plural_count,
};
use anyhow::{Result, bail};
use std::path::Path;

use super::ConvertArgs;

/// Run `iconlib convert`.
pub fn convert_folder(args: &ConvertArgs, config: &IconlibConfig) -> Result<LibraryDocument> {
    let document = convert_dir(&args.folder, config.build.extension(), config.build.max_size)?;
    document.write_to(&args.output)?;
    log!(
        "convert";
        "{} -> {}",
        plural_count(document.len(), "icon"),
        args.output.display()
    );
    Ok(document)
}

/// Convert the icons directly inside `folder`, in file name order.
fn convert_dir(folder: &Path, extension: &str, max_size: u32) -> Result<LibraryDocument> {
    if !folder.is_dir() {
        bail!("`{}` is not a directory", folder.display());
    }

    let tree = IconTree::scan_shallow(folder, extension);
    let files = tree.direct_files(folder).to_vec();
    if files.is_empty() {
        bail!("no .{} files in `{}`", extension, folder.display());
    }

    let name = name::dir_name(folder).unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string());
    let category = Category::new(name, files);

    let progress = ProgressLine::new("convert", &[("icons", category.files.len())]);
    let outcome = library::convert_category_with(&category, max_size, |_| progress.inc("icons"));
    progress.finish();

    let attempted = outcome.attempted();
    match outcome.into_document() {
        Some(document) => Ok(document),
        None => bail!("none of the {} could be converted", plural_count(attempted, "icon")),
    }
}
