//! Icons already extracted on disk.

use std::path::PathBuf;

use super::{IconProvider, ProviderError, ProviderSpec};
use crate::category::Category;

pub struct DirectoryProvider {
    spec: ProviderSpec,
    root: Option<PathBuf>,
}

impl DirectoryProvider {
    pub fn new(spec: ProviderSpec) -> Self {
        Self { spec, root: None }
    }
}

impl IconProvider for DirectoryProvider {
    fn id(&self) -> &str {
        &self.spec.id
    }

    fn display_name(&self) -> &str {
        &self.spec.name
    }

    fn retrieve(&mut self) -> Result<PathBuf, ProviderError> {
        if !self.spec.source.is_dir() {
            return Err(ProviderError::MissingSource(self.spec.source.clone()));
        }
        self.root = Some(self.spec.source.clone());
        Ok(self.spec.source.clone())
    }

    fn enumerate_categories(&self) -> Result<Vec<Category>, ProviderError> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| ProviderError::NotRetrieved(self.spec.id.clone()))?;
        self.spec.categories_in(root)
    }

    /// The directory belongs to the user; nothing to remove.
    fn release(&mut self) -> Result<(), ProviderError> {
        self.root = None;
        Ok(())
    }
}
