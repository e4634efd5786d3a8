//! # Entity Records
//!
//! An [`Entity`] is passive data: where it is, how big it is, how it should be
//! drawn, where it sits in the depth order, and a bag of typed attributes for
//! behavior-specific metadata. It has no behavior of its own; listeners act on
//! it.
//!
//! Entities are never constructed by callers. The world obtains them from its
//! pool, which resets every field and assigns a fresh [`EntityId`].

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use lumen_shared::{Color, Rect, Vec2};
use uuid::Uuid;

/// Unique identity of an entity.
///
/// Ids are assigned by the pool when an entity is obtained and never change
/// while the entity is live. They format as hyphenated UUID strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates an id from its raw 128-bit value.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self(Uuid::from_u128(raw))
    }

    /// Creates a random (version 4) id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the raw 128-bit value.
    #[inline]
    #[must_use]
    pub const fn as_raw(self) -> u128 {
        self.0.as_u128()
    }

    /// The nil id. Never handed out by a pool.
    pub const NIL: Self = Self(Uuid::nil());

    /// Checks if this is the nil id.
    #[inline]
    #[must_use]
    pub fn is_nil(self) -> bool {
        self.0.is_nil()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Opaque classifier, e.g. the key a renderer is registered under.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityKind(pub u32);

impl EntityKind {
    /// Unclassified.
    pub const NONE: Self = Self(0);
}

/// A game object tracked by the world.
pub struct Entity {
    id: EntityId,
    /// Position of the bottom-left corner in world space.
    pub position: Vec2,
    /// Position recorded by callers that want a frame-over-frame delta.
    /// The world never touches it.
    pub last_position: Vec2,
    /// Width and height.
    pub dimensions: Vec2,
    /// Render-space shift.
    pub offset: Vec2,
    /// Scale multipliers.
    pub scale: Vec2,
    /// Tint.
    pub color: Color,
    /// Classifier.
    pub kind: EntityKind,
    /// Depth. Lower values are drawn and updated first.
    pub z_index: i32,
    /// Whether the entity takes part in pairwise interaction dispatch.
    pub active: bool,
    /// Whether the entity is exempt from bounds culling.
    pub persistent: bool,
    attributes: HashMap<String, Box<dyn Any>>,
}

impl Entity {
    /// Creates an entity in its default state.
    pub(crate) fn new(id: EntityId) -> Self {
        Self {
            id,
            position: Vec2::ZERO,
            last_position: Vec2::ZERO,
            dimensions: Vec2::ZERO,
            offset: Vec2::ZERO,
            scale: Vec2::ONE,
            color: Color::WHITE,
            kind: EntityKind::NONE,
            z_index: 0,
            active: true,
            persistent: false,
            attributes: HashMap::new(),
        }
    }

    /// Puts every field back to its default and assigns `id`.
    ///
    /// The attribute map keeps its allocation.
    pub(crate) fn reset(&mut self, id: EntityId) {
        self.id = id;
        self.position = Vec2::ZERO;
        self.last_position = Vec2::ZERO;
        self.dimensions = Vec2::ZERO;
        self.offset = Vec2::ZERO;
        self.scale = Vec2::ONE;
        self.color = Color::WHITE;
        self.kind = EntityKind::NONE;
        self.z_index = 0;
        self.active = true;
        self.persistent = false;
        self.attributes.clear();
    }

    /// The entity's identity.
    #[inline]
    #[must_use]
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Moves the entity to `(x, y)`.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Sets width and height.
    pub fn set_dimensions(&mut self, width: f32, height: f32) {
        self.dimensions = Vec2::new(width, height);
    }

    /// Records the current position into `last_position`.
    pub fn remember_position(&mut self) {
        self.last_position = self.position;
    }

    /// The world-space rectangle covered by the entity.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_corner_size(self.position, self.dimensions)
    }

    /// Center of the covered rectangle.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        self.position + self.dimensions * 0.5
    }

    // ── Attributes ──────────────────────────────────────────────────

    /// Attaches `value` under `key`, replacing any previous value.
    pub fn set_attribute<T: Any>(&mut self, key: impl Into<String>, value: T) {
        self.attributes.insert(key.into(), Box::new(value));
    }

    /// Returns the attribute under `key` if it exists and has type `T`.
    #[must_use]
    pub fn attribute<T: Any>(&self, key: &str) -> Option<&T> {
        self.attributes.get(key)?.downcast_ref::<T>()
    }

    /// Mutable variant of [`Entity::attribute`].
    pub fn attribute_mut<T: Any>(&mut self, key: &str) -> Option<&mut T> {
        self.attributes.get_mut(key)?.downcast_mut::<T>()
    }

    /// Whether any attribute is stored under `key`, whatever its type.
    #[must_use]
    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Removes the attribute under `key`. Returns `true` if one was present.
    pub fn remove_attribute(&mut self, key: &str) -> bool {
        self.attributes.remove(key).is_some()
    }

    /// Number of attached attributes.
    #[must_use]
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("dimensions", &self.dimensions)
            .field("z_index", &self.z_index)
            .field("active", &self.active)
            .field("persistent", &self.persistent)
            .field("kind", &self.kind)
            .field("attributes", &keys)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entity[{} at ({}, {}) z={}]",
            self.id, self.position.x, self.position.y, self.z_index
        )
    }
}
