//! Value object trait: equality by value, not identity.
//!
//! Categories and aging settings are value objects: two with the same
//! attributes are interchangeable. Items are not, since the shop mutates them
//! in place and duplicates with the same name are distinct entries.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold {
///     days: i32,
///     bonus: i32,
/// }
///
/// impl ValueObject for Threshold {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
