//! gridlay - virtualized sticky-grid layout engine
//!
//! Computes per-cell frames for a scrollable two-dimensional grid and keeps a
//! configurable number of leading rows/columns pinned to the viewport edges
//! while the rest scrolls beneath them:
//! - One frame computation per cell per invalidation
//! - Viewport visibility queries over displayed frames
//! - Stacking tiers so pinned cells composite above scrolled ones
//! - Arbitrary per-cell sizing through a host-supplied source
//!
//! # Usage
//!
//! ```
//! use gridlay::{GridLayout, Point, Rect, Size, UniformGrid};
//!
//! let grid = UniformGrid::new(100, 20, Size::new(100.0, 24.0));
//! let mut layout = GridLayout::new();
//! layout.set_sticky_rows(1);
//! layout.set_sticky_cols(1);
//! layout.rebuild(&grid);
//!
//! layout.set_scroll_offset(Point::new(0.0, 240.0));
//! let visible: Vec<_> = layout
//!     .query(Rect::new(0.0, 240.0, 800.0, 600.0))
//!     .collect();
//! assert!(!visible.is_empty());
//! ```

pub mod error;
pub mod geometry;
pub mod layout;
pub mod source;
pub mod viewport;

pub use error::{GridlayError, Result};
pub use geometry::{Point, Rect, Size, SnapMode};
pub use layout::{AttributeTable, CellAttributes, GridLayout, StickyConfig, Tier};
pub use source::{validate_source, AxisGrid, LayoutSource, UniformGrid};
pub use viewport::Viewport;
