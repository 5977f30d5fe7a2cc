//! Layout engine core: attribute computation, sticky repositioning, and
//! visibility queries.
//!
//! This module handles:
//! - Pre-computing cell frames from a shape + size source
//! - Rewriting displayed frames for pinned (sticky) rows and columns
//! - Stacking-tier assignment (corner above edge above base)
//! - Viewport visibility queries over displayed frames

mod attributes;
mod engine;
mod sticky;

pub use attributes::{AttributeTable, CellAttributes, Tier};
pub use engine::GridLayout;
pub use sticky::StickyConfig;
