//! Plain value types passed to and returned from native calls

use serde::{Deserialize, Serialize};

/// Integer point in render-target coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point, rounded toward the origin and clamped to `i32::MAX`
    pub fn center(&self) -> Point {
        let half = |origin: i32, extent: u32| {
            i32::try_from(i64::from(origin) + i64::from(extent / 2)).unwrap_or(i32::MAX)
        };
        Point::new(half(self.x, self.w), half(self.y, self.h))
    }

    /// Whether `point` lies inside the rectangle (right and bottom edges excluded)
    pub fn contains_point(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x && px < x + i64::from(self.w) && py >= y && py < y + i64::from(self.h)
    }
}

/// RGBA color with 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from all four channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }
}

/// Width and height of a window or texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

/// Live cursor position and button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mouse {
    /// Cursor x relative to the focused window
    pub x: i32,
    /// Cursor y relative to the focused window
    pub y: i32,
    /// Left button held
    pub left: bool,
    /// Middle button held
    pub middle: bool,
    /// Right button held
    pub right: bool,
}

impl Mouse {
    /// Cursor position as a point
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the cursor is over `rect`
    pub fn has_intersection(&self, rect: &Rect) -> bool {
        rect.contains_point(self.position())
    }
}

/// How source pixels combine with the render target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// No blending, destination = source
    #[default]
    None,
    /// Alpha blending
    Blend,
    /// Additive blending
    Add,
    /// Color modulate
    Mod,
    /// Color multiply
    Mul,
}

/// Mirroring applied while copying a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flip {
    /// Draw as-is
    #[default]
    None,
    /// Mirror left to right
    Horizontal,
    /// Mirror top to bottom
    Vertical,
}
