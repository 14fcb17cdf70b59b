//! Icons shipped as a `.zip` archive.
//!
//! The archive is extracted once into `<cache>/<id>_icons`; a later run
//! reuses a non-empty extraction directory as-is.

use std::fs;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use super::{IconProvider, ProviderError, ProviderSpec};
use crate::category::Category;
use crate::{debug, log};

pub struct ArchiveProvider {
    spec: ProviderSpec,
    extract_dir: PathBuf,
    retrieved: bool,
}

impl ArchiveProvider {
    pub fn new(spec: ProviderSpec, cache_dir: &Path) -> Self {
        let extract_dir = cache_dir.join(format!("{}_icons", spec.id));
        Self {
            spec,
            extract_dir,
            retrieved: false,
        }
    }
}

impl IconProvider for ArchiveProvider {
    fn id(&self) -> &str {
        &self.spec.id
    }

    fn display_name(&self) -> &str {
        &self.spec.name
    }

    fn retrieve(&mut self) -> Result<PathBuf, ProviderError> {
        if is_populated(&self.extract_dir) {
            log!("extract"; "using cached extraction: {}", self.extract_dir.display());
        } else {
            if !self.spec.source.is_file() {
                return Err(ProviderError::MissingSource(self.spec.source.clone()));
            }
            log!("extract"; "{}", self.spec.source.display());
            let count = extract_zip(&self.spec.source, &self.extract_dir)?;
            debug!("extract"; "{} entries -> {}", count, self.extract_dir.display());
        }

        self.retrieved = true;
        Ok(self.extract_dir.clone())
    }

    fn enumerate_categories(&self) -> Result<Vec<Category>, ProviderError> {
        if !self.retrieved {
            return Err(ProviderError::NotRetrieved(self.spec.id.clone()));
        }
        self.spec.categories_in(&self.extract_dir)
    }

    fn release(&mut self) -> Result<(), ProviderError> {
        self.retrieved = false;
        if self.extract_dir.exists() {
            fs::remove_dir_all(&self.extract_dir)
                .map_err(|e| ProviderError::Io(self.extract_dir.clone(), e))?;
        }
        Ok(())
    }
}

fn is_populated(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_some())
}

/// Extract every entry of `archive_path` into `output_dir`.
///
/// Entries whose names would escape `output_dir` are skipped.
fn extract_zip(archive_path: &Path, output_dir: &Path) -> Result<usize, ProviderError> {
    let io_err = |path: &Path| {
        let path = path.to_path_buf();
        move |e| ProviderError::Io(path, e)
    };
    let zip_err = |e| ProviderError::Archive(archive_path.to_path_buf(), e);

    let file = fs::File::open(archive_path).map_err(io_err(archive_path))?;
    let mut archive = zip::ZipArchive::new(BufReader::new(file)).map_err(zip_err)?;
    fs::create_dir_all(output_dir).map_err(io_err(output_dir))?;

    let mut extracted = 0;
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(zip_err)?;
        let Some(name) = entry.enclosed_name() else {
            debug!("extract"; "skipping unsafe entry: {}", entry.name());
            continue;
        };
        let out_path = output_dir.join(name);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(io_err(&out_path))?;
            continue;
        }
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(io_err(parent))?;
        }
        let mut out_file = fs::File::create(&out_path).map_err(io_err(&out_path))?;
        io::copy(&mut entry, &mut out_file).map_err(io_err(&out_path))?;
        extracted += 1;
    }

    Ok(extracted)
}
