//! Entities: things with a stable identity.

/// Something identified by id rather than by its field values.
///
/// A catalog product is an entity: two bouquets with the same name and price are
/// still different products when their ids differ, and a cart line is matched to
/// its product purely by id.
pub trait Entity {
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> Self::Id;

    /// Returns `true` when both values refer to the same identity.
    fn same_identity<E: Entity<Id = Self::Id>>(&self, other: &E) -> bool {
        self.id() == other.id()
    }
}
