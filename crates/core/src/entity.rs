//! Entity trait: identity that survives every other field changing.

/// Something the storefront tracks by identity rather than by value.
pub trait Entity {
    /// Strongly-typed identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Two entities are the same thing when their ids match, whatever the
    /// rest of their attributes say.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
