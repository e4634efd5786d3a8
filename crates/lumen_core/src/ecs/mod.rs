//! # Entity World
//!
//! Pooled entities, depth-ordered updates, and pairwise dispatch.
//!
//! ## Design Philosophy
//!
//! - Entities are passive data; behavior lives in listeners
//! - Structural changes are queued and applied at phase boundaries
//! - Update and interaction order follow a stable sort by depth
//! - Identity is checked on every add, never assumed

mod bounds;
mod entity;
mod listener;
mod world;

pub use bounds::{BoundsStrategy, Unbounded, ViewBounds, WorldExtents};
pub use entity::{Entity, EntityId, EntityKind};
pub use listener::{ListenerId, WorldCommands, WorldListener};
pub use world::{FrameStats, Iter, World};
