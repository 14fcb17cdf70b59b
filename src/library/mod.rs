//! draw.io `<mxlibrary>` documents.
//!
//! A library is a JSON array of [`IconRecord`]s wrapped in a single
//! `<mxlibrary>` tag. Record order is the input order; keys inside each
//! record are sorted. The same records always produce the same bytes.

pub mod slug;

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::icon::{self, ConvertError, IconRecord};
use crate::log;
use crate::utils::path::file_name_lossy;

pub use slug::{SlugAllocator, SlugMode, slugify};

const OPEN_TAG: &str = "<mxlibrary>";
const CLOSE_TAG: &str = "</mxlibrary>";

/// An assembled, immutable library document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryDocument {
    records: Vec<IconRecord>,
}

impl LibraryDocument {
    pub fn new(records: Vec<IconRecord>) -> Self {
        Self { records }
    }

    #[allow(dead_code)]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serialize to the final document text.
    pub fn to_xml(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(&self.records)?;
        Ok(format!("{OPEN_TAG}{json}{CLOSE_TAG}"))
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let xml = self.to_xml().context("Failed to serialize library")?;
        fs::write(path, xml).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// An icon that could not be converted.
#[derive(Debug)]
pub struct IconFailure {
    pub path: PathBuf,
    pub error: ConvertError,
}

/// Result of converting every icon of a category.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub name: String,
    pub records: Vec<IconRecord>,
    pub failures: Vec<IconFailure>,
}

impl CategoryOutcome {
    /// Total icons attempted.
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    /// Consume into the library, or `None` if nothing converted.
    pub fn into_document(self) -> Option<LibraryDocument> {
        (!self.records.is_empty()).then(|| LibraryDocument::new(self.records))
    }
}

/// Convert every icon of `category` in parallel, calling `on_done` after
/// each one.
///
/// Results keep the category's file order. Failed icons are logged and
/// reported in [`CategoryOutcome::failures`]; they never abort siblings.
pub fn convert_category_with<F>(category: &Category, max_size: u32, on_done: F) -> CategoryOutcome
where
    F: Fn(&PathBuf) + Sync,
{
    let results: Vec<Result<IconRecord, ConvertError>> = category
        .files
        .par_iter()
        .map(|path| {
            let result = icon::convert_file(path, max_size);
            on_done(path);
            result
        })
        .collect();

    let mut records = Vec::with_capacity(results.len());
    let mut failures = Vec::new();
    for (path, result) in category.files.iter().zip(results) {
        match result {
            Ok(record) => records.push(record),
            Err(error) => {
                log!("error"; "{}: {}", file_name_lossy(path), error_chain(&error));
                failures.push(IconFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    CategoryOutcome {
        name: category.name.clone(),
        records,
        failures,
    }
}

/// `error: cause: cause` on one line.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
