//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two rule sets with
/// the same magnitudes are the same rule set. To "modify" one, build a new value
/// (for example through a `with_*` builder method that consumes `self`).
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Threshold {
///     days: i64,
/// }
///
/// impl ValueObject for Threshold {}
///
/// assert_eq!(Threshold { days: 10 }, Threshold { days: 10 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
