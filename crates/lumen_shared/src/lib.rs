//! # LUMEN Shared
//!
//! Plain data types used by the entity world and the systems that observe it.
//!
//! ## RULE
//!
//! This crate must NEVER depend on a renderer, a window library, or the world
//! itself. Everything in here is `Copy` data.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod math;

pub use math::{Color, Rect, Vec2, View};
