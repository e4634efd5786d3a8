//! Mathematical types shared between the world and its collaborators.
//!
//! Everything here is 2D and `f32`: world space has its origin at the
//! bottom-left, x grows to the right and y grows upwards.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - positions, sizes, offsets, scale factors
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Both components set to one
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle given by its bottom-left corner and its size.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Bottom edge
    pub y: f32,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub height: f32,
}

impl Rect {
    /// Creates a new rectangle
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from a corner and a size vector
    #[must_use]
    pub const fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self::new(corner.x, corner.y, size.x, size.y)
    }

    /// Right edge
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Whether the two rectangles share at least one point.
    ///
    /// Touching edges count as overlapping, so a zero-sized rectangle lying
    /// on the border of another one still overlaps it.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x <= other.right()
            && self.right() >= other.x
            && self.y <= other.top()
            && self.top() >= other.y
    }

    /// Returns a copy grown by `margin` on every side
    #[must_use]
    pub fn grow(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }
}

/// RGBA color, each channel in `0.0..=1.0`
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
    /// Alpha
    pub a: f32,
}

impl Color {
    /// Creates a new color
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque white
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Orthographic view onto the world.
///
/// `position` is the center of the view. The visible area is the viewport
/// scaled by `zoom` (a zoom above one shows more of the world).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct View {
    /// Center of the view in world space
    pub position: Vec2,
    /// Viewport width in world units at zoom 1
    pub viewport_width: f32,
    /// Viewport height in world units at zoom 1
    pub viewport_height: f32,
    /// Zoom factor
    pub zoom: f32,
}

impl View {
    /// Creates a view centered on the origin
    #[must_use]
    pub const fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            viewport_width,
            viewport_height,
            zoom: 1.0,
        }
    }

    /// Returns a copy centered on `position`
    #[must_use]
    pub fn centered_on(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// The world-space rectangle currently visible through this view
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        let width = self.viewport_width * self.zoom;
        let height = self.viewport_height * self.zoom;
        Rect::new(
            self.position.x - width / 2.0,
            self.position.y - height / 2.0,
            width,
            height,
        )
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
