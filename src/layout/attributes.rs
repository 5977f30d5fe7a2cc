//! Pre-computed layout attributes for a grid.
//!
//! This module computes every cell's frame once per invalidation in a single
//! row-major scan, accumulating horizontal offset within a row and vertical
//! offset across rows. The resulting table answers visibility queries
//! without re-deriving geometry.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size, SnapMode};
use crate::source::LayoutSource;

/// Stacking tier of a cell, ordered so that sorting by tier gives the
/// compositing order: pinned cells render above scrolled ones, and corner
/// (doubly pinned) cells above edge (singly pinned) ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Tier {
    /// Scrolls with the content (default).
    #[default]
    Base,
    /// Pinned along exactly one axis (sticky row or sticky column).
    Edge,
    /// Pinned along both axes (sticky row and sticky column).
    Corner,
}

/// Layout attributes for a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellAttributes {
    /// Logical row of this cell.
    pub row: u32,
    /// Logical column of this cell.
    pub col: u32,
    /// Unshifted frame computed purely from grid geometry.
    pub base_frame: Rect,
    /// Displayed frame: `base_frame` plus any sticky scroll adjustment.
    /// Equal to `base_frame` until a reposition pass runs.
    pub frame: Rect,
    /// Stacking tier assigned by the last reposition pass.
    pub tier: Tier,
}

/// Pre-computed attribute table for a grid: one entry per logical
/// coordinate, in row-major order, plus the content extent.
///
/// The table is built once per geometry invalidation and patched in place by
/// the sticky reposition pass; its shape only changes on a rebuild.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    pub(crate) rows: Vec<Vec<CellAttributes>>,
    extent: Size,
}

impl AttributeTable {
    /// Compute attributes for every cell of `source` in a row-major scan.
    ///
    /// Frames accumulate left-to-right within a row and top-to-bottom across
    /// rows; the vertical offset advances by the height of the *last* cell
    /// processed in each row (callers needing uniform row heights must supply
    /// uniform column heights). Offsets accumulate from unsnapped sizes so
    /// snapping error never compounds across a row.
    ///
    /// A size-provider miss or negative dimension for an in-range coordinate
    /// is a host contract violation: it is logged at error level and replaced
    /// by a zero size so the scan still terminates with consistent offsets.
    pub fn build(source: &impl LayoutSource, snap: SnapMode) -> Self {
        let row_count = source.row_count();
        let mut rows = Vec::with_capacity(row_count as usize);
        let mut extent = Size::ZERO;

        let mut y: f32 = 0.0;
        for row in 0..row_count {
            let col_count = source.column_count(row);
            let mut entries = Vec::with_capacity(col_count as usize);
            let mut x: f32 = 0.0;
            let mut last_height: f32 = 0.0;

            for col in 0..col_count {
                let size = checked_size(source, row, col);
                let frame = snap.apply(Rect::new(x, y, size.width, size.height));
                entries.push(CellAttributes {
                    row,
                    col,
                    base_frame: frame,
                    frame,
                    tier: Tier::Base,
                });
                // Content extent tracks the last laid-out cell's corner, so a
                // trailing zero-column row cannot collapse the width.
                extent = Size::new(frame.max_x(), frame.max_y());
                x += size.width;
                last_height = size.height;
            }

            y += last_height;
            rows.push(entries);
        }

        tracing::trace!(
            rows = row_count,
            cells = rows.iter().map(Vec::len).sum::<usize>(),
            width = extent.width,
            height = extent.height,
            "attribute table built"
        );

        Self { rows, extent }
    }

    /// Total bounding size of the unshifted grid.
    ///
    /// Always derived from base frames: sticky shifting never changes the
    /// declared scrollable extent. (If it did, the host's scroll range would
    /// depend on scroll position.)
    pub fn content_extent(&self) -> Size {
        self.extent
    }

    /// Number of cell entries in the table.
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// Attributes for a single coordinate, `None` if out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<&CellAttributes> {
        self.rows.get(row as usize)?.get(col as usize)
    }

    /// All entries in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = &CellAttributes> {
        self.rows.iter().flatten()
    }

    /// Entries whose *displayed* frame intersects `viewport`.
    ///
    /// Lazy full scan; callers must not rely on the iteration order. For
    /// practical grid sizes this is cheap enough to run per rendered frame.
    pub fn query(&self, viewport: Rect) -> impl Iterator<Item = &CellAttributes> {
        self.entries()
            .filter(move |attrs| attrs.frame.intersects(&viewport))
    }
}

/// Size lookup with the contract-violation policy: log loudly, substitute
/// zero, keep scanning.
fn checked_size(source: &impl LayoutSource, row: u32, col: u32) -> Size {
    match source.cell_size(row, col) {
        Some(size) if size.width >= 0.0 && size.height >= 0.0 => size,
        Some(size) => {
            tracing::error!(
                row,
                col,
                width = size.width,
                height = size.height,
                "size provider returned a negative size; clamping to zero"
            );
            Size::new(size.width.max(0.0), size.height.max(0.0))
        }
        None => {
            tracing::error!(
                row,
                col,
                "size provider returned no size for an in-range cell; substituting zero"
            );
            Size::ZERO
        }
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
    use crate::geometry::Size;
    use crate::source::UniformGrid;

    #[test]
    fn test_build_uniform() {
        let table = AttributeTable::build(
            &UniformGrid::new(3, 4, Size::new(100.0, 50.0)),
            SnapMode::Pixel,
        );

        assert_eq!(table.len(), 12);
        let cell = table.get(1, 2).unwrap();
        assert_eq!(cell.base_frame, Rect::new(200.0, 50.0, 100.0, 50.0));
        assert_eq!(cell.frame, cell.base_frame);
        assert_eq!(cell.tier, Tier::Base);
        assert_eq!(table.content_extent(), Size::new(400.0, 150.0));
    }

    #[test]
    fn test_build_empty_grid() {
        let table = AttributeTable::build(
            &UniformGrid::new(0, 10, Size::new(100.0, 50.0)),
            SnapMode::Pixel,
        );
        assert!(table.is_empty());
        assert_eq!(table.content_extent(), Size::ZERO);
        assert_eq!(table.get(0, 0), None);
    }

    #[test]
    fn test_missing_size_substitutes_zero_and_scan_continues() {
        struct Gappy;
        impl LayoutSource for Gappy {
            fn row_count(&self) -> u32 {
                1
            }
            fn column_count(&self, _row: u32) -> u32 {
                3
            }
            fn cell_size(&self, _row: u32, col: u32) -> Option<Size> {
                if col == 1 {
                    None
                } else {
                    Some(Size::new(100.0, 50.0))
                }
            }
        }

        let table = AttributeTable::build(&Gappy, SnapMode::Pixel);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0, 1).unwrap().base_frame.width, 0.0);
        // Offsets stay consistent past the violation.
        assert_eq!(table.get(0, 2).unwrap().base_frame.x, 100.0);
    }

    #[test]
    fn test_snap_rounds_fractional_sizes_without_seams() {
        let table = AttributeTable::build(
            &UniformGrid::new(1, 3, Size::new(33.4, 20.0)),
            SnapMode::Pixel,
        );
        let a = table.get(0, 0).unwrap().base_frame;
        let b = table.get(0, 1).unwrap().base_frame;
        let c = table.get(0, 2).unwrap().base_frame;
        assert_eq!(a.max_x(), b.x);
        assert_eq!(b.max_x(), c.x);
        assert_eq!(c.max_x(), (33.4f32 * 3.0).round());
    }
}
