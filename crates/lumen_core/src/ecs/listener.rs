//! # World Listeners
//!
//! Renderers, behavior systems and camera controllers observe the world
//! through [`WorldListener`]. Every callback has a no-op default, so a
//! listener only implements what it cares about.
//!
//! Callbacks run while the world is walking its own lists, so they cannot
//! borrow the world. Structural changes go through the [`WorldCommands`]
//! buffer each callback receives instead; the world applies the buffer at the
//! next phase boundary.

use crate::error::ListenerResult;

use super::entity::{Entity, EntityId};

/// Identifies a registered listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u32);

/// Listens to world events.
///
/// Callbacks are synchronous and must not block. An `Err` stops the world
/// operation that triggered it and is handed to the caller.
#[allow(unused_variables)]
pub trait WorldListener {
    /// An entity became visible: added eagerly, or flushed from the pending
    /// queue at the start of a frame.
    fn on_add(&mut self, entity: &Entity, commands: &mut WorldCommands) -> ListenerResult {
        Ok(())
    }

    /// An entity is about to go back to the pool.
    fn on_remove(&mut self, entity: &Entity, commands: &mut WorldCommands) -> ListenerResult {
        Ok(())
    }

    /// Once per frame for every entity that survived the bounds check.
    fn on_update(
        &mut self,
        entity: &mut Entity,
        delta: f32,
        commands: &mut WorldCommands,
    ) -> ListenerResult {
        Ok(())
    }

    /// Once per frame for every ordered pair of distinct active entities.
    fn on_interact(
        &mut self,
        entity: &mut Entity,
        other: &Entity,
        delta: f32,
        commands: &mut WorldCommands,
    ) -> ListenerResult {
        Ok(())
    }

    /// The world dropped every entity at once.
    fn on_clear(&mut self) -> ListenerResult {
        Ok(())
    }
}

type SpawnFn = Box<dyn FnOnce(&mut Entity)>;

/// Structural requests made from inside listener callbacks.
///
/// Spawns are always lazy: the new entity becomes visible at the start of the
/// next frame. Removals join the removal queue of the frame in progress.
#[derive(Default)]
pub struct WorldCommands {
    spawns: Vec<Option<SpawnFn>>,
    removals: Vec<EntityId>,
}

impl WorldCommands {
    /// Requests a new entity with default fields.
    pub fn spawn(&mut self) {
        self.spawns.push(None);
    }

    /// Requests a new entity customized by `mutator`.
    pub fn spawn_with(&mut self, mutator: impl FnOnce(&mut Entity) + 'static) {
        self.spawns.push(Some(Box::new(mutator)));
    }

    /// Requests removal of the entity with the given id.
    pub fn remove(&mut self, id: EntityId) {
        self.removals.push(id);
    }

    /// Whether nothing has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spawns.is_empty() && self.removals.is_empty()
    }

    pub(crate) fn take_spawns(&mut self) -> Vec<Option<SpawnFn>> {
        std::mem::take(&mut self.spawns)
    }

    pub(crate) fn take_removals(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.removals)
    }

    pub(crate) fn clear(&mut self) {
        self.spawns.clear();
        self.removals.clear();
    }
}

impl std::fmt::Debug for WorldCommands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldCommands")
            .field("spawns", &self.spawns.len())
            .field("removals", &self.removals)
            .finish()
    }
}
