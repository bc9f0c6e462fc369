//! # Catalog
//!
//! The product grid's entries.
//!
//! ## Sources
//! - Built-in: `data/catalog.json`, compiled into the binary
//! - File: any JSON array of catalog entries (`TISSO_CATALOG_PATH`)
//!
//! Every source is validated before use (titles, non-negative prices,
//! unique product keys).

use std::path::Path;

use tisso_core::validation::validate_catalog;
use tisso_core::{CatalogEntry, CoreError};
use tracing::info;

use crate::error::CatalogError;
use crate::state::ConfigState;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// The loaded, validated product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// The demo grid of six products.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// The configured catalog file, or the built-in grid when none is set.
    pub fn from_config(config: &ConfigState) -> Result<Self, CatalogError> {
        match &config.catalog_path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Parses and validates a JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Reads a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        validate_catalog(&entries)?;
        Ok(Catalog { entries })
    }

    /// Entries in grid order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Looks up an entry by product key (id, or title when there is no id).
    pub fn get(&self, product_key: &str) -> Result<&CatalogEntry, CoreError> {
        self.entries
            .iter()
            .find(|e| e.product_key() == product_key)
            .ok_or_else(|| CoreError::ProductNotFound(product_key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
