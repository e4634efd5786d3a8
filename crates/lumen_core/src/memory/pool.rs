//! # Entity Pool
//!
//! Free-list allocator for [`Entity`] records. Slots are recycled instead of
//! dropped so a world that spawns and retires objects every frame does not
//! churn the heap once it is warm.

use serde::{Deserialize, Serialize};

use crate::ecs::{Entity, EntityId};

/// How a pool assigns ids to the entities it hands out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random version 4 UUIDs.
    #[default]
    Random,
    /// Counter starting at 1, never rewound (not even by [`EntityPool::clear`]).
    /// Gives reproducible ids for replays and tests.
    Sequential,
}

/// Handle to an obtained slot in an [`EntityPool`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    /// Index into the pool.
    index: usize,
}

impl PoolHandle {
    /// Slot index inside the pool.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.index
    }
}

/// A recycling pool of entities.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. It belongs to exactly one world.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool = EntityPool::new(512, IdStrategy::Random);
///
/// // Obtain - reuses a retired slot when one is available
/// let handle = pool.obtain();
/// pool.entity_mut(handle).z_index = 3;
///
/// // Free - the slot goes back on the free list
/// pool.free(handle);
/// ```
pub struct EntityPool {
    /// Every slot ever created, live or retired.
    slots: Vec<Entity>,
    /// Liveness per slot.
    live: Vec<bool>,
    /// Free list - indices of retired slots.
    free_list: Vec<usize>,
    /// Number of live entities.
    allocated_count: usize,
    strategy: IdStrategy,
    /// Last value handed out by the sequential strategy.
    sequence: u128,
}

impl EntityPool {
    /// Creates an empty pool with room reserved for `capacity` entities.
    ///
    /// The capacity is a hint: the pool grows when it runs dry.
    #[must_use]
    pub fn new(capacity: usize, strategy: IdStrategy) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: Vec::with_capacity(capacity),
            free_list: Vec::with_capacity(capacity),
            allocated_count: 0,
            strategy,
            sequence: 0,
        }
    }

    /// Number of slots created so far.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently live entities.
    #[inline]
    #[must_use]
    pub const fn allocated_count(&self) -> usize {
        self.allocated_count
    }

    /// Number of retired slots ready for reuse.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.free_list.len()
    }

    /// The id strategy in use.
    #[must_use]
    pub const fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    fn next_id(&mut self) -> EntityId {
        match self.strategy {
            IdStrategy::Random => EntityId::random(),
            IdStrategy::Sequential => {
                self.sequence += 1;
                EntityId::from_raw(self.sequence)
            }
        }
    }

    /// Obtains a live entity in its default state with a fresh id.
    ///
    /// Reuses a retired slot when one exists, otherwise grows the pool.
    pub fn obtain(&mut self) -> PoolHandle {
        let id = self.next_id();

        let index = if let Some(index) = self.free_list.pop() {
            self.slots[index].reset(id);
            self.live[index] = true;
            index
        } else {
            self.slots.push(Entity::new(id));
            self.live.push(true);
            self.slots.len() - 1
        };

        self.allocated_count += 1;
        tracing::trace!(%id, index, "obtained entity slot");
        PoolHandle { index }
    }

    /// Retires a live entity, making its slot available again.
    ///
    /// # Returns
    ///
    /// `false` if the handle was out of range or already free.
    pub fn free(&mut self, handle: PoolHandle) -> bool {
        match self.live.get_mut(handle.index) {
            Some(live) if *live => {
                *live = false;
                self.free_list.push(handle.index);
                self.allocated_count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Whether the handle refers to a live entity.
    #[inline]
    #[must_use]
    pub fn is_live(&self, handle: PoolHandle) -> bool {
        self.live.get(handle.index).copied().unwrap_or(false)
    }

    /// Gets a live entity.
    #[inline]
    #[must_use]
    pub fn get(&self, handle: PoolHandle) -> Option<&Entity> {
        if self.is_live(handle) {
            Some(&self.slots[handle.index])
        } else {
            None
        }
    }

    /// Gets a live entity mutably.
    #[inline]
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut Entity> {
        if self.is_live(handle) {
            Some(&mut self.slots[handle.index])
        } else {
            None
        }
    }

    /// Direct slot access for handles the caller knows to be valid.
    #[inline]
    pub(crate) fn entity(&self, handle: PoolHandle) -> &Entity {
        &self.slots[handle.index]
    }

    /// Mutable counterpart of [`EntityPool::entity`].
    #[inline]
    pub(crate) fn entity_mut(&mut self, handle: PoolHandle) -> &mut Entity {
        &mut self.slots[handle.index]
    }

    /// Borrows two distinct slots at once, the first one mutably.
    pub(crate) fn pair_mut(&mut self, first: PoolHandle, second: PoolHandle) -> (&mut Entity, &Entity) {
        debug_assert_ne!(first.index, second.index, "pair must be two distinct slots");
        if first.index < second.index {
            let (low, high) = self.slots.split_at_mut(second.index);
            (&mut low[first.index], &high[0])
        } else {
            let (low, high) = self.slots.split_at_mut(first.index);
            (&mut high[0], &low[second.index])
        }
    }

    #[cfg(test)]
    pub(crate) fn rewind_sequence(&mut self, value: u128) {
        self.sequence = value;
    }

    /// Retires every slot at once. Slots are kept for reuse.
    pub fn clear(&mut self) {
        for live in &mut self.live {
            *live = false;
        }
        self.free_list.clear();
        self.free_list.extend((0..self.slots.len()).rev());
        self.allocated_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_obtain_free() {
        let mut pool = EntityPool::new(4, IdStrategy::Sequential);

        let h1 = pool.obtain();
        assert_eq!(pool.get(h1).unwrap().id(), EntityId::from_raw(1));
        assert_eq!(pool.allocated_count(), 1);

        assert!(pool.free(h1));
        assert_eq!(pool.allocated_count(), 0);
        assert!(pool.get(h1).is_none());
        assert!(!pool.free(h1)); // double free is refused
    }

    #[test]
    fn test_pool_grows_past_capacity_hint() {
        let mut pool = EntityPool::new(1, IdStrategy::Random);

        let handles: Vec<_> = (0..3).map(|_| pool.obtain()).collect();
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.allocated_count(), 3);
        assert!(handles.iter().all(|h| pool.is_live(*h)));
    }

    #[test]
    fn test_pool_reuse_resets_fields_and_renews_id() {
        let mut pool = EntityPool::new(1, IdStrategy::Sequential);

        let h1 = pool.obtain();
        let first_id = pool.entity(h1).id();
        {
            let entity = pool.entity_mut(h1);
            entity.z_index = 12;
            entity.persistent = true;
            entity.set_attribute("loot", 5_u8);
        }
        pool.free(h1);

        let h2 = pool.obtain();
        assert_eq!(h1.index(), h2.index()); // Same slot reused
        let entity = pool.get(h2).unwrap();
        assert_ne!(entity.id(), first_id);
        assert_eq!(entity.z_index, 0);
        assert!(!entity.persistent);
        assert!(!entity.has_attribute("loot"));
    }

    #[test]
    fn test_clear_retires_everything_but_keeps_sequence() {
        let mut pool = EntityPool::new(2, IdStrategy::Sequential);
        pool.obtain();
        pool.obtain();

        pool.clear();
        assert_eq!(pool.allocated_count(), 0);
        assert_eq!(pool.free_count(), 2);

        let h = pool.obtain();
        assert_eq!(h.index(), 0);
        assert_eq!(pool.entity(h).id(), EntityId::from_raw(3));
    }

    #[test]
    fn test_pair_mut_in_both_orders() {
        let mut pool = EntityPool::new(2, IdStrategy::Sequential);
        let a = pool.obtain();
        let b = pool.obtain();

        let (first, second) = pool.pair_mut(b, a);
        first.z_index = second.z_index + 1;
        assert_eq!(pool.entity(b).z_index, 1);

        let (first, second) = pool.pair_mut(a, b);
        first.z_index = second.z_index + 1;
        assert_eq!(pool.entity(a).z_index, 2);
    }
}
