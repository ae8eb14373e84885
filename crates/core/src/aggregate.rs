//! Aggregate root trait.

use crate::entity::Entity;

/// Aggregate root marker + minimal interface.
///
/// An aggregate is a cluster of entities stored and retrieved as one unit. Its
/// identity is the identity of its root entity, and repositories key on it.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Entity the aggregate is anchored on.
    type Root: Entity<Id = Self::Id>;

    /// Name of the aggregate as it appears in errors and logs (e.g. `"customer"`).
    const TYPE: &'static str;

    fn root(&self) -> &Self::Root;

    /// Returns the aggregate identifier, i.e. the root entity's id.
    fn id(&self) -> &Self::Id {
        self.root().id()
    }
}
