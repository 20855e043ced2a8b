//! Entity trait: identity that survives field edits.

/// Something addressed by a stable id rather than by its values.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    /// Whether this entity is the one addressed by `id`.
    fn has_id(&self, id: &Self::Id) -> bool {
        self.id() == id
    }
}
