//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`ItemKey { "amul", "milk" }`)
/// - **Entity**: has identity that survives mutation (an `Item` whose quantity
///   grows is still the same item)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Sku(String);
///
/// impl ValueObject for Sku {}
///
/// assert_eq!(Sku("A-1".into()), Sku("A-1".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
