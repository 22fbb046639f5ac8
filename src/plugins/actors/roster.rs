//! Ordered entity collection.

use bevy::prelude::*;

/// Live members of one collection, in insertion order.
///
/// Scans that stop at the first match (combat resolution) rely on this order.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    members: Vec<Entity>,
}

impl Roster {
    #[inline]
    pub fn add(&mut self, e: Entity) {
        self.members.push(e);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.members.iter().copied()
    }

    pub fn contains(&self, e: Entity) -> bool {
        self.members.contains(&e)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(Entity) -> bool) {
        self.members.retain(|&e| keep(e));
    }

    /// Despawn every member and empty the collection.
    pub fn reset(&mut self, commands: &mut Commands) {
        for e in self.members.drain(..) {
            commands.entity(e).despawn();
        }
    }
}
