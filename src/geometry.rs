//! Geometry primitives shared across the layout engine.
//!
//! All coordinates are top-left-origin content-space values in `f32` layout
//! units. Frames produced by the builder are optionally snapped to the pixel
//! grid (see [`SnapMode`]) so adjacent cells share edges exactly.

use serde::{Deserialize, Serialize};

/// A point in content space (also used as a scroll offset).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width/height pair. Used for cell sizes and the content extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle (x/y is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// True if the interiors of the two rectangles overlap.
    ///
    /// Edge-touching rectangles do not intersect, and an empty rectangle
    /// (zero width or height) intersects nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }

    /// This rectangle translated by the given deltas.
    pub fn shifted(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Snap each edge to the nearest integral boundary.
    ///
    /// Both edges are rounded independently (x and x + width), so two
    /// rectangles that shared an edge before snapping still share it after.
    /// Rounding the origin and the width separately would open sub-pixel
    /// seams between adjacent cells.
    pub fn snapped(&self) -> Rect {
        let x0 = self.x.round();
        let y0 = self.y.round();
        let x1 = self.max_x().round();
        let y1 = self.max_y().round();
        Rect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}

/// Frame snapping policy applied by the attribute builder.
///
/// Pixel snapping avoids hairline seams on renderers that rasterize at
/// integral boundaries. Hosts rendering into a surface that handles
/// sub-pixel geometry itself can disable it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapMode {
    /// Round frame edges to the nearest integral boundary (default).
    #[default]
    Pixel,
    /// Leave frames at their exact accumulated positions.
    None,
}

impl SnapMode {
    pub(crate) fn apply(self, rect: Rect) -> Rect {
        match self {
            SnapMode::Pixel => rect.snapped(),
            SnapMode::None => rect,
        }
    }
}
