//! `dove-core`: domain building blocks shared by the storefront crates.
//!
//! Pure types only: no IO, no rendering, no logging setup.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{EntryId, TileId};
pub use value_object::ValueObject;
