//! # LUMEN Core
//!
//! The entity world: it owns every live game object, decides when objects are
//! created, updated and destroyed each frame, and tells listeners about every
//! pair of active objects so behavior systems can react to each other.
//!
//! ## Rules
//!
//! 1. **Only the world changes membership** - callers go through
//!    `add_object`/`remove`, listeners through `WorldCommands`
//! 2. **Deferred structure** - additions and removals land at phase
//!    boundaries, never in the middle of a walk
//! 3. **Recycled storage** - entities come from a pool and go back to it
//!
//! ## Example
//!
//! ```rust,ignore
//! use lumen_core::{World, WorldExtents};
//!
//! let mut world = World::new();
//! world.set_bounds(WorldExtents::from_size(640.0, 480.0));
//!
//! let player = world.add_object_with(|e| e.z_index = 1, false)?.id();
//! world.update(1.0 / 60.0)?;
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod ecs;
pub mod error;
pub mod memory;

pub use config::{WorldConfig, DEFAULT_CACHE_SIZE};
pub use ecs::{
    BoundsStrategy, Entity, EntityId, EntityKind, FrameStats, ListenerId, Unbounded, ViewBounds,
    World, WorldCommands, WorldExtents, WorldListener,
};
pub use error::{ListenerError, ListenerResult, WorldError, WorldResult};
pub use memory::{EntityPool, IdStrategy, PoolHandle};

pub use lumen_shared::{Color, Rect, Vec2, View};
