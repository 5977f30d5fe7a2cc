//! Viewport state management for scrolling hosts.
//!
//! Thin host-side helper: the layout engine itself is pure computation over
//! supplied inputs and never observes scroll events. Hosts that want
//! ready-made clamping and visible-rect derivation can keep one of these per
//! grid and feed its state into [`crate::GridLayout`].

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, Size};

/// Viewport state - the visible window into content space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Horizontal scroll position in content coordinates.
    pub scroll_x: f32,
    /// Vertical scroll position in content coordinates.
    pub scroll_y: f32,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default dimensions.
    pub fn new() -> Self {
        Self {
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }

    /// Current scroll offset as a point, for feeding
    /// [`crate::GridLayout::set_scroll_offset`].
    pub fn scroll_offset(&self) -> Point {
        Point::new(self.scroll_x, self.scroll_y)
    }

    /// The currently visible rectangle in content space, for feeding
    /// [`crate::GridLayout::query`].
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.scroll_x, self.scroll_y, self.width, self.height)
    }

    /// Clamp scroll position to the valid range for the given content
    /// extent: at least 0, at most `extent - viewport` per axis (0 when the
    /// content fits entirely).
    pub fn clamp_scroll(&mut self, extent: Size) {
        let max_x = (extent.width - self.width).max(0.0);
        let max_y = (extent.height - self.height).max(0.0);
        self.scroll_x = self.scroll_x.clamp(0.0, max_x);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    /// Scroll by delta amounts, clamped.
    pub fn scroll_by(&mut self, delta_x: f32, delta_y: f32, extent: Size) {
        self.scroll_x += delta_x;
        self.scroll_y += delta_y;
        self.clamp_scroll(extent);
    }

    /// Set absolute scroll position, clamped.
    pub fn set_scroll(&mut self, x: f32, y: f32, extent: Size) {
        self.scroll_x = x;
        self.scroll_y = y;
        self.clamp_scroll(extent);
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }
}
