//! `dove-storefront`: page-level state for the storefront sections.
//!
//! Each section (header, hero, collections grid, footer) owns its state and
//! its own subscription to viewport events; nothing reads ambient window
//! globals. The [`page::StorefrontPage`] shell wires the sections to one
//! [`viewport::ViewportEvents`] hub.

pub mod collections;
pub mod config;
pub mod featured;
pub mod footer;
pub mod header;
pub mod hero;
pub mod page;
pub mod viewport;

pub use collections::CollectionsPage;
pub use config::StorefrontConfig;
pub use featured::{CategoryTile, featured_tiles};
pub use footer::{FooterState, Newsletter};
pub use header::HeaderState;
pub use hero::{HeroCarousel, HeroSlide};
pub use page::StorefrontPage;
pub use viewport::{Section, ViewportError, ViewportEvent, ViewportEvents, ViewportSubscription};
