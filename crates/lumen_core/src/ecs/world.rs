//! # Entity World
//!
//! The [`World`] owns every live entity and decides when entities appear,
//! get updated and disappear.
//!
//! ## Frame
//!
//! ```text
//! update(delta)
//!   1. flush pending additions   (FIFO, on_add each;
//!                                 ids already queued for removal are held back)
//!   2. stable sort by z_index
//!   3. for each entity, in order:
//!        out of bounds && !persistent -> queue removal, skip
//!        on_update(entity)
//!        active -> on_interact(entity, other) for every other active entity
//!   4. flush pending removals    (on_remove each, back to the pool)
//! ```
//!
//! Additions and removals are only ever applied at phase boundaries, so the
//! walk in phase 3 never sees the active list change under it.
//!
//! ## Ownership
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │ World                                               │
//! │  pool:      EntityPool (every Entity, live or free) │
//! │  active:    Vec<PoolHandle>  (sorted by z_index)    │
//! │  additions: Vec<PoolHandle>  (lazy, not visible)    │
//! │  removals:  Vec<EntityId>    (visible until flush)  │
//! │  identity:  HashMap<EntityId, PoolHandle>           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! An id is in `identity` exactly while its entity sits in `active`,
//! `additions`, or the removal queue.
//!
//! Listeners only hear `on_remove` for entities they heard `on_add` for. A
//! lazy addition removed before it became visible goes back to the pool
//! silently.

use std::collections::{HashMap, HashSet};

use lumen_shared::View;

use crate::config::WorldConfig;
use crate::error::{ListenerResult, WorldError, WorldResult};
use crate::memory::{EntityPool, PoolHandle};

use super::bounds::{BoundsStrategy, Unbounded};
use super::entity::{Entity, EntityId};
use super::listener::{ListenerId, WorldCommands, WorldListener};

type ListenerSlot = (ListenerId, Box<dyn WorldListener>);

/// What happened during one [`World::update`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Pending additions made visible.
    pub added: usize,
    /// Entities queued for removal by the bounds check.
    pub culled: usize,
    /// Entities that received `on_update`.
    pub updated: usize,
    /// Ordered pairs that received `on_interact`.
    pub interactions: usize,
    /// Entities returned to the pool.
    pub removed: usize,
    /// Queued ids that were no longer registered.
    pub consistency_violations: usize,
}

/// Game world which contains all game objects and manages them.
pub struct World {
    pool: EntityPool,
    /// Visible entities, sorted by depth at the start of every frame.
    active: Vec<PoolHandle>,
    /// Lazily added entities, visible from the next frame on.
    additions: Vec<PoolHandle>,
    /// Removal queue, flushed at the end of the frame.
    removals: Vec<EntityId>,
    /// Mirror of `removals` for duplicate detection.
    pending_removal: HashSet<EntityId>,
    identity: HashMap<EntityId, PoolHandle>,
    listeners: Vec<ListenerSlot>,
    next_listener: u32,
    commands: WorldCommands,
    bounds: Box<dyn BoundsStrategy>,
    view: View,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Creates a world with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&WorldConfig::default())
    }

    /// Creates a world from a loaded configuration.
    #[must_use]
    pub fn with_config(config: &WorldConfig) -> Self {
        Self {
            pool: EntityPool::new(config.cache_size, config.id_strategy),
            active: Vec::with_capacity(config.cache_size),
            additions: Vec::new(),
            removals: Vec::new(),
            pending_removal: HashSet::new(),
            identity: HashMap::with_capacity(config.cache_size),
            listeners: Vec::new(),
            next_listener: 0,
            commands: WorldCommands::default(),
            bounds: Box::new(Unbounded),
            view: View::default(),
        }
    }

    // ── Listeners ────────────────────────────────────────────────────

    /// Registers a listener. Listeners are notified in no particular order.
    pub fn add_listener(&mut self, listener: impl WorldListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregisters a listener and hands it back.
    pub fn remove_listener(&mut self, id: ListenerId) -> Option<Box<dyn WorldListener>> {
        let position = self.listeners.iter().position(|(slot, _)| *slot == id)?;
        Some(self.listeners.remove(position).1)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ── Bounds & View ────────────────────────────────────────────────

    /// Sets the bounds of the world. By default, everything is in bounds.
    pub fn set_bounds(&mut self, bounds: impl BoundsStrategy + 'static) {
        self.bounds = Box::new(bounds);
    }

    /// The currently active bounds strategy.
    #[must_use]
    pub fn bounds(&self) -> &dyn BoundsStrategy {
        self.bounds.as_ref()
    }

    /// Replaces the view the bounds strategy is evaluated against.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Mutable access to the view, e.g. for a camera controller.
    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    // ── Entity Management ────────────────────────────────────────────

    /// Adds a new game object with default fields.
    ///
    /// A lazy object becomes visible at the start of the next
    /// [`update`](World::update) but can be looked up by id right away.
    ///
    /// # Errors
    ///
    /// [`WorldError::IdentityCollision`] if the pool produced an id that is
    /// still registered, [`WorldError::Listener`] if an `on_add` callback failed.
    pub fn add_object(&mut self, lazy: bool) -> WorldResult<&mut Entity> {
        self.insert(lazy, None::<fn(&mut Entity)>)
    }

    /// Adds a new game object and customizes it with `mutator` before any
    /// listener sees it.
    ///
    /// # Errors
    ///
    /// Same as [`World::add_object`].
    pub fn add_object_with<F>(&mut self, mutator: F, lazy: bool) -> WorldResult<&mut Entity>
    where
        F: FnOnce(&mut Entity),
    {
        self.insert(lazy, Some(mutator))
    }

    fn insert<F>(&mut self, lazy: bool, mutator: Option<F>) -> WorldResult<&mut Entity>
    where
        F: FnOnce(&mut Entity),
    {
        tracing::debug!("obtaining new game object");
        let handle = self.pool.obtain();
        let id = self.pool.entity(handle).id();

        if let Some(existing) = self.identity.get(&id) {
            tracing::error!(
                %id,
                existing = existing.index(),
                "game object already exists, unable to add new object"
            );
            self.pool.free(handle);
            return Err(WorldError::IdentityCollision { id });
        }

        if lazy {
            tracing::debug!(%id, "requested addition of new game object");
            self.additions.push(handle);
        } else {
            tracing::debug!(%id, "added new game object");
            self.active.push(handle);
        }

        if let Some(mutator) = mutator {
            mutator(self.pool.entity_mut(handle));
        }
        self.identity.insert(id, handle);

        if !lazy {
            notify_add(&mut self.listeners, self.pool.entity(handle), &mut self.commands)?;
            self.apply_commands()?;
        }

        Ok(self.pool.entity_mut(handle))
    }

    /// Queues the game object with the given id for removal.
    ///
    /// The object stays visible until the end of the next
    /// [`update`](World::update). Queuing the same id twice has no effect.
    ///
    /// # Returns
    ///
    /// `true` if the id was newly queued.
    pub fn remove(&mut self, id: EntityId) -> bool {
        if self.pending_removal.insert(id) {
            tracing::debug!(%id, "requested lazy removal of game object");
            self.removals.push(id);
            true
        } else {
            tracing::trace!(%id, "removal already requested");
            false
        }
    }

    /// Queues several game objects for removal.
    pub fn remove_all(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        for id in ids {
            self.remove(id);
        }
    }

    /// Looks up a game object by id, pending ones included.
    #[must_use]
    pub fn get_object_by_id(&self, id: EntityId) -> Option<&Entity> {
        self.identity.get(&id).map(|&handle| self.pool.entity(handle))
    }

    /// Mutable variant of [`World::get_object_by_id`].
    pub fn get_object_by_id_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        let handle = *self.identity.get(&id)?;
        Some(self.pool.entity_mut(handle))
    }

    /// Whether the id belongs to a game object owned by this world.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.identity.contains_key(&id)
    }

    /// Number of visible game objects. Pending additions are not counted.
    #[must_use]
    pub fn size(&self) -> usize {
        self.active.len()
    }

    /// Whether no game object is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Number of lazily added objects waiting for the next frame.
    #[must_use]
    pub fn pending_additions(&self) -> usize {
        self.additions.len()
    }

    /// Number of objects queued for removal.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.removals.len()
    }

    /// The pool backing this world.
    #[must_use]
    pub fn pool(&self) -> &EntityPool {
        &self.pool
    }

    /// Visible game objects in their current order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            handles: self.active.iter(),
            pool: &self.pool,
        }
    }

    /// Drops every game object at once.
    ///
    /// No `on_remove` is sent; listeners get a single `on_clear` instead.
    ///
    /// # Errors
    ///
    /// [`WorldError::Listener`] if an `on_clear` callback failed. The world is
    /// already empty at that point.
    pub fn clear(&mut self) -> WorldResult<()> {
        self.pool.clear();
        self.active.clear();
        self.additions.clear();
        self.removals.clear();
        self.pending_removal.clear();
        self.identity.clear();
        self.commands.clear();
        for (_, listener) in &mut self.listeners {
            listener.on_clear()?;
        }
        tracing::debug!("cleared all game objects");
        Ok(())
    }

    // ── Frame ────────────────────────────────────────────────────────

    /// Runs one frame. See the module docs for the phases.
    ///
    /// # Errors
    ///
    /// [`WorldError::Listener`] as soon as a callback fails. The rest of the
    /// frame is skipped; queued removals stay queued.
    pub fn update(&mut self, delta: f32) -> WorldResult<FrameStats> {
        let mut stats = FrameStats::default();

        // 1. Flush additions
        let pending = std::mem::take(&mut self.additions);
        for (position, &handle) in pending.iter().enumerate() {
            let id = self.pool.entity(handle).id();
            if self.pending_removal.contains(&id) {
                tracing::debug!(%id, "game object removed before it became visible");
                self.additions.push(handle);
                continue;
            }

            tracing::debug!(%id, "added new game object");
            self.active.push(handle);
            stats.added += 1;
            let notified = notify_add(&mut self.listeners, self.pool.entity(handle), &mut self.commands);
            if let Err(err) = notified {
                // The failing object stays visible; the rest wait for the next frame.
                self.additions.extend_from_slice(&pending[position + 1..]);
                return Err(err.into());
            }
        }
        self.apply_commands()?;

        // 2. Order
        let pool = &self.pool;
        self.active.sort_by_key(|&handle| pool.entity(handle).z_index);

        // 3. Per-entity pass
        for index in 0..self.active.len() {
            let handle = self.active[index];
            let entity = self.pool.entity(handle);
            let id = entity.id();

            if !entity.persistent && !self.bounds.is_in_bounds(entity, &self.view) {
                tracing::debug!(%id, "game object is out of bounds, removing");
                if self.remove(id) {
                    stats.culled += 1;
                }
                continue;
            }

            for (_, listener) in &mut self.listeners {
                listener.on_update(self.pool.entity_mut(handle), delta, &mut self.commands)?;
            }
            stats.updated += 1;

            if !self.pool.entity(handle).active {
                continue;
            }
            for other_index in 0..self.active.len() {
                let other = self.active[other_index];
                let candidate = self.pool.entity(other);
                if !candidate.active || candidate.id() == id {
                    continue;
                }
                for (_, listener) in &mut self.listeners {
                    let (entity, partner) = self.pool.pair_mut(handle, other);
                    listener.on_interact(entity, partner, delta, &mut self.commands)?;
                }
                stats.interactions += 1;
            }
        }
        self.apply_commands()?;

        // 4. Flush removals
        let removals = std::mem::take(&mut self.removals);
        for (position, &id) in removals.iter().enumerate() {
            if let Err(err) = self.remove_internally(id, &mut stats) {
                self.removals.extend_from_slice(&removals[position + 1..]);
                return Err(err);
            }
        }
        self.removals = removals;
        self.removals.clear();
        self.apply_commands()?;

        tracing::trace!(?stats, "frame complete");
        Ok(stats)
    }

    /// Unregisters, notifies and frees one queued game object.
    ///
    /// A failing `on_remove` does not stop the object from being freed.
    fn remove_internally(&mut self, id: EntityId, stats: &mut FrameStats) -> WorldResult<()> {
        self.pending_removal.remove(&id);
        let Some(handle) = self.identity.remove(&id) else {
            tracing::error!(%id, "game object does not exist");
            stats.consistency_violations += 1;
            return Ok(());
        };

        let notified = if let Some(position) = self.active.iter().position(|&h| h == handle) {
            tracing::debug!(%id, "removing game object");
            self.active.remove(position);
            notify_remove(&mut self.listeners, self.pool.entity(handle), &mut self.commands)
        } else {
            tracing::debug!(%id, "dropping pending game object");
            self.additions.retain(|&h| h != handle);
            Ok(())
        };
        self.pool.free(handle);
        stats.removed += 1;
        notified.map_err(WorldError::from)
    }

    /// Applies what listeners requested through [`WorldCommands`].
    fn apply_commands(&mut self) -> WorldResult<()> {
        for id in self.commands.take_removals() {
            self.remove(id);
        }
        for spawn in self.commands.take_spawns() {
            self.insert(true, spawn)?;
        }
        Ok(())
    }
}

fn notify_add(
    listeners: &mut [ListenerSlot],
    entity: &Entity,
    commands: &mut WorldCommands,
) -> ListenerResult {
    for (_, listener) in listeners.iter_mut() {
        listener.on_add(entity, commands)?;
    }
    Ok(())
}

fn notify_remove(
    listeners: &mut [ListenerSlot],
    entity: &Entity,
    commands: &mut WorldCommands,
) -> ListenerResult {
    for (_, listener) in listeners.iter_mut() {
        listener.on_remove(entity, commands)?;
    }
    Ok(())
}

/// Iterator over the visible game objects of a [`World`].
pub struct Iter<'a> {
    handles: std::slice::Iter<'a, PoolHandle>,
    pool: &'a EntityPool,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entity;

    fn next(&mut self) -> Option<Self::Item> {
        let handle = *self.handles.next()?;
        Some(self.pool.entity(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.handles.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Entity;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::ListenerError;
    use crate::memory::IdStrategy;

    fn sequential_world() -> World {
        World::with_config(&WorldConfig {
            cache_size: 8,
            id_strategy: IdStrategy::Sequential,
        })
    }

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert_eq!(world.size(), 0);
        assert!(world.is_empty());
        assert_eq!(world.listener_count(), 0);
        assert_eq!(world.bounds().world_width(), 0.0);
    }

    #[test]
    fn test_identity_collision_aborts_add() {
        let mut world = sequential_world();
        let first = world.add_object(false).unwrap().id();

        // Force the pool to hand out the same id again.
        world.pool.rewind_sequence(0);
        let err = world.add_object(false).unwrap_err();

        assert_eq!(err, WorldError::IdentityCollision { id: first });
        assert_eq!(world.size(), 1);
        assert_eq!(world.pool().allocated_count(), 1);
        assert!(world.get_object_by_id(first).is_some());
    }

    #[test]
    fn test_unknown_removal_is_counted_and_skipped() {
        let mut world = sequential_world();
        let kept = world.add_object(false).unwrap().id();
        let doomed = world.add_object(false).unwrap().id();

        world.remove(EntityId::from_raw(999));
        world.remove(doomed);
        let stats = world.update(0.1).unwrap();

        assert_eq!(stats.consistency_violations, 1);
        assert_eq!(stats.removed, 1);
        assert!(world.contains(kept));
        assert!(!world.contains(doomed));
    }

    #[test]
    fn test_duplicate_removal_is_ignored() {
        let mut world = sequential_world();
        let id = world.add_object(false).unwrap().id();

        world.remove(id);
        world.remove(id);
        assert_eq!(world.pending_removals(), 1);

        let stats = world.update(0.1).unwrap();
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.consistency_violations, 0);
        assert_eq!(world.pool().allocated_count(), 0);
    }

    #[test]
    fn test_listener_failure_halts_frame() {
        struct Exploding;
        impl WorldListener for Exploding {
            fn on_update(
                &mut self,
                entity: &mut Entity,
                _delta: f32,
                _commands: &mut WorldCommands,
            ) -> ListenerResult {
                if entity.z_index == 1 {
                    return Err(ListenerError::new("bad sprite"));
                }
                Ok(())
            }
        }

        let mut world = sequential_world();
        world.add_listener(Exploding);
        let survivor = world.add_object_with(|e| e.z_index = 1, false).unwrap().id();
        world.remove(survivor);

        let err = world.update(0.1).unwrap_err();
        assert_eq!(err, WorldError::Listener(ListenerError::new("bad sprite")));
        // Removal flush never ran.
        assert!(world.contains(survivor));
        assert_eq!(world.pending_removals(), 1);
    }

    #[test]
    fn test_commands_spawn_lazily_and_remove_this_frame() {
        struct Splitter;
        impl WorldListener for Splitter {
            fn on_update(
                &mut self,
                entity: &mut Entity,
                _delta: f32,
                commands: &mut WorldCommands,
            ) -> ListenerResult {
                if entity.has_attribute("splits") {
                    commands.remove(entity.id());
                    commands.spawn_with(|child| child.z_index = 2);
                    commands.spawn_with(|child| child.z_index = 2);
                }
                Ok(())
            }
        }

        let mut world = sequential_world();
        world.add_listener(Splitter);
        world.add_object_with(|e| e.set_attribute("splits", ()), false).unwrap();

        let stats = world.update(0.1).unwrap();
        assert_eq!(stats.removed, 1);
        assert_eq!(world.size(), 0);
        assert_eq!(world.pending_additions(), 2);

        let stats = world.update(0.1).unwrap();
        assert_eq!(stats.added, 2);
        assert!(world.iter().all(|e| e.z_index == 2));
    }

    #[test]
    fn test_failing_on_remove_still_frees_object() {
        struct Grumpy;
        impl WorldListener for Grumpy {
            fn on_remove(&mut self, _entity: &Entity, _commands: &mut WorldCommands) -> ListenerResult {
                Err(ListenerError::new("not now"))
            }
        }

        let mut world = sequential_world();
        world.add_listener(Grumpy);
        let a = world.add_object(false).unwrap().id();
        let b = world.add_object(false).unwrap().id();
        world.remove_all([a, b]);

        assert!(world.update(0.1).is_err());
        assert!(!world.contains(a));
        assert!(world.contains(b));
        assert_eq!(world.pending_removals(), 1);
    }

    #[test]
    fn test_remove_listener_stops_notifications() {
        #[derive(Clone, Default)]
        struct Counter(Rc<RefCell<usize>>);
        impl WorldListener for Counter {
            fn on_add(&mut self, _entity: &Entity, _commands: &mut WorldCommands) -> ListenerResult {
                *self.0.borrow_mut() += 1;
                Ok(())
            }
        }

        let counter = Counter::default();
        let mut world = sequential_world();
        let id = world.add_listener(counter.clone());
        world.add_object(false).unwrap();

        assert!(world.remove_listener(id).is_some());
        assert!(world.remove_listener(id).is_none());
        world.add_object(false).unwrap();

        assert_eq!(*counter.0.borrow(), 1);
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut world = sequential_world();
        let visible = world.add_object(false).unwrap().id();
        let pending = world.add_object(true).unwrap().id();
        world.remove(visible);

        world.clear().unwrap();

        assert_eq!(world.size(), 0);
        assert_eq!(world.pending_additions(), 0);
        assert_eq!(world.pending_removals(), 0);
        assert!(!world.contains(visible));
        assert!(!world.contains(pending));
        assert_eq!(world.pool().allocated_count(), 0);

        let stats = world.update(0.1).unwrap();
        assert_eq!(stats, FrameStats::default());
    }

    #[test]
    fn test_failed_on_add_leaves_rest_of_flush_pending() {
        struct Boom;
        impl WorldListener for Boom {
            fn on_add(&mut self, entity: &Entity, _commands: &mut WorldCommands) -> ListenerResult {
                if entity.z_index == 1 {
                    return Err(ListenerError::new("no sprite for depth 1"));
                }
                Ok(())
            }
        }

        struct Added(Rc<RefCell<Vec<EntityId>>>);
        impl WorldListener for Added {
            fn on_add(&mut self, entity: &Entity, _commands: &mut WorldCommands) -> ListenerResult {
                self.0.borrow_mut().push(entity.id());
                Ok(())
            }
        }

        let added = Rc::new(RefCell::new(Vec::new()));
        let mut world = sequential_world();
        world.add_listener(Boom);
        world.add_listener(Added(Rc::clone(&added)));
        let first = world.add_object_with(|e| e.z_index = 1, true).unwrap().id();
        let second = world.add_object_with(|e| e.z_index = 0, true).unwrap().id();

        assert!(world.update(0.1).is_err());
        assert_eq!(world.size(), 1);
        assert_eq!(world.pending_additions(), 1);
        assert!(added.borrow().is_empty());

        let stats = world.update(0.1).unwrap();
        assert_eq!(stats.added, 1);
        assert_eq!(*added.borrow(), vec![second]);
        assert!(world.contains(first));
        assert_eq!(world.size(), 2);

        world.update(0.1).unwrap();
        assert_eq!(*added.borrow(), vec![second]);
    }

    #[test]
    fn test_cull_of_already_queued_object_is_not_counted() {
        let mut world = sequential_world();
        world.set_bounds(crate::ecs::WorldExtents::from_size(10.0, 10.0));
        let id = world.add_object_with(|e| e.set_position(50.0, 50.0), false).unwrap().id();

        assert!(world.remove(id));
        assert!(!world.remove(id));
        let stats = world.update(0.1).unwrap();

        assert_eq!(stats.culled, 0);
        assert_eq!(stats.removed, 1);
        assert!(!world.contains(id));
    }

    #[test]
    fn test_failing_on_clear_still_empties_world() {
        struct Stubborn;
        impl WorldListener for Stubborn {
            fn on_clear(&mut self) -> ListenerResult {
                Err(ListenerError::new("cannot release textures"))
            }
        }

        let mut world = sequential_world();
        world.add_listener(Stubborn);
        let visible = world.add_object(false).unwrap().id();
        let pending = world.add_object(true).unwrap().id();

        let err = world.clear().unwrap_err();

        assert_eq!(err, WorldError::Listener(ListenerError::new("cannot release textures")));
        assert_eq!(world.size(), 0);
        assert_eq!(world.pending_additions(), 0);
        assert!(!world.contains(visible));
        assert!(!world.contains(pending));
        assert_eq!(world.pool().allocated_count(), 0);
    }

    #[test]
    fn test_mutator_runs_before_on_add() {
        struct DepthSpy(Rc<RefCell<Vec<i32>>>);
        impl WorldListener for DepthSpy {
            fn on_add(&mut self, entity: &Entity, _commands: &mut WorldCommands) -> ListenerResult {
                self.0.borrow_mut().push(entity.z_index);
                Ok(())
            }
        }

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut world = sequential_world();
        world.add_listener(DepthSpy(Rc::clone(&seen)));
        world.add_object_with(|e| e.z_index = 42, false).unwrap();

        assert_eq!(*seen.borrow(), vec![42]);
    }
}
