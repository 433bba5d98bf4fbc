//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are considered equal, and they are never mutated in place: "changing" one
//! means replacing it with a new value.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Copy/Clone**: values are cheap to duplicate
/// - **PartialEq/Eq**: compared by their attribute values
/// - **Debug**: printable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// enum Category { Legendary, Ordinary }
///
/// impl ValueObject for Category {}
/// ```
pub trait ValueObject: Copy + Clone + PartialEq + Eq + core::fmt::Debug {}
