//! The storefront's built-in collection.

use crate::catalog::Catalog;
use crate::loader::{CatalogLoadError, parse_catalog};

const COLLECTIONS_JSON: &str = include_str!("../data/collections.json");

/// The nine-piece collection shipped with the storefront, priced in naira.
pub fn default_catalog() -> Result<Catalog, CatalogLoadError> {
    parse_catalog(COLLECTIONS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn seed_catalog_loads() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.currency(), Some(Currency::Ngn));
        assert!(catalog.entries().iter().all(|e| e.price.amount().is_some()));
    }
}
