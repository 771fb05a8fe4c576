//! Loading catalogs from JSON.
//!
//! A catalog file is a JSON array of entries in the authored shape
//! (`priceRange`, `listedAt`, prices as display strings).

use std::path::{Path, PathBuf};

use thiserror::Error;

use dove_core::DomainError;

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}

/// Parse and validate a catalog from JSON text.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(json)?;
    Ok(Catalog::new(entries)?)
}

/// Read, parse and validate a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogLoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&json)?;
    tracing::info!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}
