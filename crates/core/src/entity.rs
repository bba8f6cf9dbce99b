//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same `id()` are the same entity, whatever their
/// other attributes currently hold.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
