//! Catalog view-model for the storefront collections page.
//!
//! Turns an immutable catalog plus user-selected filter/sort/search state into
//! the ordered, paginated subsequence the display layer renders. Everything in
//! this crate is deterministic and free of IO except [`loader`].

pub mod catalog;
pub mod criteria;
pub mod engine;
pub mod entry;
pub mod loader;
pub mod money;
pub mod pagination;
pub mod seed;
pub mod view;

pub use catalog::Catalog;
pub use criteria::{FilterCriteria, Selection, SortOption};
pub use entry::{CatalogEntry, Category, PriceBucket};
pub use loader::{CatalogLoadError, load_catalog, parse_catalog};
pub use money::{Currency, Money, PriceTag};
pub use pagination::{DEFAULT_PAGE_SIZE, PaginationCursor};
pub use view::{CatalogPage, CatalogView};
