//! # Memory Management
//!
//! Recycling storage for entities.
//!
//! Entity records are allocated once and reused. During gameplay a warm pool
//! hands out retired slots instead of allocating new ones.

mod pool;

pub use pool::{EntityPool, IdStrategy, PoolHandle};
