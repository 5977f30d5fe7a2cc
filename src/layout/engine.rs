//! Stateful layout engine facade.

use crate::geometry::{Point, Rect, Size, SnapMode};
use crate::layout::attributes::{AttributeTable, CellAttributes};
use crate::layout::sticky::StickyConfig;
use crate::source::LayoutSource;

/// A virtualized grid layout: owns the attribute table and sequences the
/// build / reposition passes.
///
/// Lifecycle contract (caller-driven, single-threaded):
/// - Whenever the grid shape, any cell size, or the sticky counts may have
///   changed, call [`rebuild`](Self::rebuild). It discards the table,
///   recomputes every base frame, then repositions at the current offset.
/// - Pure scroll changes go through
///   [`set_scroll_offset`](Self::set_scroll_offset), which only patches
///   displayed frames and tiers against the last-built base geometry.
///
/// Before the first rebuild the engine is a valid empty layout: queries
/// return nothing and the content extent is zero.
#[derive(Debug, Default)]
pub struct GridLayout {
    table: AttributeTable,
    sticky: StickyConfig,
    scroll: Point,
    snap: SnapMode,
}

impl GridLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine with an explicit snapping policy (default is pixel
    /// snapping).
    pub fn with_snap_mode(snap: SnapMode) -> Self {
        Self {
            snap,
            ..Self::default()
        }
    }

    /// Discard and recompute the whole attribute table from `source`, then
    /// reposition for the current sticky configuration and scroll offset.
    pub fn rebuild(&mut self, source: &impl LayoutSource) {
        self.table = AttributeTable::build(source, self.snap);
        self.table.apply_sticky(self.sticky, self.scroll);
    }

    /// Update the scroll offset and reposition sticky cells. Skips the
    /// rebuild: base geometry is unchanged by scrolling.
    pub fn set_scroll_offset(&mut self, offset: Point) {
        self.scroll = offset;
        self.table.apply_sticky(self.sticky, self.scroll);
    }

    pub fn scroll_offset(&self) -> Point {
        self.scroll
    }

    /// Set the number of pinned leading rows. The caller must follow up
    /// with [`rebuild`](Self::rebuild) before querying, per the lifecycle
    /// contract.
    pub fn set_sticky_rows(&mut self, rows: u32) {
        self.sticky.rows = rows;
    }

    /// Set the number of pinned leading columns. Same sequencing rule as
    /// [`set_sticky_rows`](Self::set_sticky_rows).
    pub fn set_sticky_cols(&mut self, cols: u32) {
        self.sticky.cols = cols;
    }

    pub fn sticky_config(&self) -> StickyConfig {
        self.sticky
    }

    /// True if the coordinate falls inside either sticky band. Purely a
    /// function of the configuration, so it is valid even before a rebuild
    /// and for out-of-range coordinates.
    pub fn is_sticky(&self, row: u32, col: u32) -> bool {
        self.sticky.is_sticky(row, col)
    }

    /// Total scrollable content size, from *unshifted* geometry. (0, 0)
    /// before the first rebuild.
    pub fn content_extent(&self) -> Size {
        self.table.content_extent()
    }

    /// Attributes for one coordinate, `None` if out of range or not yet
    /// built.
    pub fn attributes(&self, row: u32, col: u32) -> Option<&CellAttributes> {
        self.table.get(row, col)
    }

    /// Cells whose displayed frame intersects `viewport`. Call per rendered
    /// frame; cost is linear in the table size.
    pub fn query(&self, viewport: Rect) -> impl Iterator<Item = &CellAttributes> {
        self.table.query(viewport)
    }

    /// Base-geometry extent of the sticky column band.
    pub fn sticky_width(&self) -> f32 {
        self.table.sticky_width(self.sticky)
    }

    /// Base-geometry extent of the sticky row band.
    pub fn sticky_height(&self) -> f32 {
        self.table.sticky_height(self.sticky)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::source::UniformGrid;

    #[test]
    fn test_unbuilt_engine_is_a_valid_empty_layout() {
        let engine = GridLayout::new();
        assert_eq!(engine.content_extent(), Size::ZERO);
        assert_eq!(engine.query(Rect::new(0.0, 0.0, 1000.0, 1000.0)).count(), 0);
        assert_eq!(engine.attributes(0, 0), None);
    }

    #[test]
    fn test_is_sticky_is_independent_of_geometry() {
        let mut engine = GridLayout::new();
        engine.set_sticky_rows(2);
        engine.set_sticky_cols(1);
        assert!(engine.is_sticky(1, 99));
        assert!(engine.is_sticky(99, 0));
        assert!(!engine.is_sticky(2, 1));
    }

    #[test]
    fn test_rebuild_then_scroll_fast_path() {
        let grid = UniformGrid::new(4, 4, Size::new(100.0, 50.0));
        let mut engine = GridLayout::new();
        engine.set_sticky_rows(1);
        engine.set_sticky_cols(1);
        engine.rebuild(&grid);

        engine.set_scroll_offset(Point::new(30.0, 20.0));
        let corner = engine.attributes(0, 0).unwrap();
        assert_eq!((corner.frame.x, corner.frame.y), (30.0, 20.0));

        // Scroll again without a rebuild: still derived from base frames.
        engine.set_scroll_offset(Point::new(60.0, 40.0));
        let corner = engine.attributes(0, 0).unwrap();
        assert_eq!((corner.frame.x, corner.frame.y), (60.0, 40.0));

        let body = engine.attributes(2, 2).unwrap();
        assert_eq!(body.frame, body.base_frame);
    }

    #[test]
    fn test_rebuild_applies_pending_sticky_and_scroll_state() {
        let grid = UniformGrid::new(2, 2, Size::new(100.0, 50.0));
        let mut engine = GridLayout::new();
        engine.set_scroll_offset(Point::new(10.0, 5.0));
        engine.set_sticky_rows(1);
        engine.rebuild(&grid);

        let pinned = engine.attributes(0, 1).unwrap();
        assert_eq!(pinned.frame.y, 5.0);
        assert_eq!(pinned.frame.x, 100.0);
    }
}
