//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances holding the same values are
/// interchangeable. They are validated once at construction and never mutated
/// afterwards, so any instance in circulation already satisfies its invariants.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
