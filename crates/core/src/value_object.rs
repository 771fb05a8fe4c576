//! Value object trait: equality by value, not identity.

/// Marker trait for immutable values compared by their attributes.
///
/// A price of `₦85,000` is equal to every other `₦85,000`; a catalog entry
/// with the same title as another is still a different entry. The former is
/// a value object, the latter an [`Entity`](crate::Entity).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     minor_units: u64,
///     currency: Currency,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
