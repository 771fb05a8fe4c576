//! Runtime configuration read from the environment.

use std::path::PathBuf;

use dove_catalog::seed::default_catalog;
use dove_catalog::{Catalog, CatalogLoadError, DEFAULT_PAGE_SIZE, PaginationCursor, load_catalog};
use dove_core::DomainResult;

pub const PAGE_SIZE_ENV: &str = "DOVE_PAGE_SIZE";
pub const CATALOG_PATH_ENV: &str = "DOVE_CATALOG_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub page_size: usize,
    /// Catalog JSON file; the built-in collection when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unusable values are logged and
    /// replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PAGE_SIZE_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.page_size = size,
                _ => tracing::warn!(
                    value = raw.as_str(),
                    default = DEFAULT_PAGE_SIZE,
                    "{PAGE_SIZE_ENV} is not a positive integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(CATALOG_PATH_ENV) {
            let raw = raw.trim();
            if raw.is_empty() {
                tracing::warn!("{CATALOG_PATH_ENV} is empty; using built-in catalog");
            } else {
                config.catalog_path = Some(PathBuf::from(raw));
            }
        }

        config
    }

    pub fn cursor(&self) -> DomainResult<PaginationCursor> {
        PaginationCursor::new(self.page_size)
    }

    pub fn load_catalog(&self) -> Result<Catalog, CatalogLoadError> {
        match &self.catalog_path {
            Some(path) => load_catalog(path),
            None => default_catalog(),
        }
    }
}
