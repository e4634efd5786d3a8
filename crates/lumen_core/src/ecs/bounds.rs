//! # Bounds Strategies
//!
//! A [`BoundsStrategy`] decides whether an entity is still inside the region
//! the world cares about. Entities that fall outside (and are not
//! `persistent`) are removed by the world at the end of the frame.
//!
//! The world extents reported here are also read by camera controllers that
//! keep the view inside the world.

use lumen_shared::{Rect, Vec2, View};

use super::entity::Entity;

/// Describes when an entity is in bounds.
pub trait BoundsStrategy {
    /// Whether `entity` is inside the active region, given the current view.
    fn is_in_bounds(&self, entity: &Entity, view: &View) -> bool;

    /// Bottom-left corner of the world.
    fn world_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Width of the world.
    fn world_width(&self) -> f32;

    /// Height of the world.
    fn world_height(&self) -> f32;
}

/// Everything is in bounds. The world starts with this strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unbounded;

impl BoundsStrategy for Unbounded {
    fn is_in_bounds(&self, _entity: &Entity, _view: &View) -> bool {
        true
    }

    fn world_width(&self) -> f32 {
        0.0
    }

    fn world_height(&self) -> f32 {
        0.0
    }
}

/// Fixed world rectangle, typically the size of the loaded map.
///
/// An entity stays in bounds while its rectangle overlaps the extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldExtents {
    extents: Rect,
}

impl WorldExtents {
    /// Creates extents from a rectangle.
    #[must_use]
    pub const fn new(extents: Rect) -> Self {
        Self { extents }
    }

    /// Extents starting at the origin.
    #[must_use]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(Rect::new(0.0, 0.0, width, height))
    }

    /// The covered rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.extents
    }
}

impl BoundsStrategy for WorldExtents {
    fn is_in_bounds(&self, entity: &Entity, _view: &View) -> bool {
        self.extents.overlaps(&entity.rect())
    }

    fn world_offset(&self) -> Vec2 {
        Vec2::new(self.extents.x, self.extents.y)
    }

    fn world_width(&self) -> f32 {
        self.extents.width
    }

    fn world_height(&self) -> f32 {
        self.extents.height
    }
}

/// Culls whatever drifts too far outside the view.
///
/// The visible rectangle is grown by `padding` on every side so entities just
/// off-screen survive. There is no fixed world, so the extents are empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewBounds {
    padding: f32,
}

impl ViewBounds {
    /// Creates the strategy with the given padding in world units.
    #[must_use]
    pub const fn new(padding: f32) -> Self {
        Self { padding }
    }
}

impl BoundsStrategy for ViewBounds {
    fn is_in_bounds(&self, entity: &Entity, view: &View) -> bool {
        view.visible_rect().grow(self.padding).overlaps(&entity.rect())
    }

    fn world_width(&self) -> f32 {
        0.0
    }

    fn world_height(&self) -> f32 {
        0.0
    }
}
