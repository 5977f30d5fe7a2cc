//! Sticky-band repositioning.
//!
//! Rewrites displayed frames so cells inside the sticky bands stay visually
//! pinned while the rest of the grid scrolls beneath them, and assigns each
//! cell its stacking tier.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::layout::attributes::{AttributeTable, Tier};

/// Number of leading rows and columns pinned to the viewport edges.
///
/// A coordinate is sticky if `row < rows` or `col < cols`; doubly sticky
/// (corner) if both hold. Counts larger than the actual grid degrade to
/// "everything is sticky".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StickyConfig {
    pub rows: u32,
    pub cols: u32,
}

impl StickyConfig {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// True if the coordinate falls inside either sticky band.
    pub fn is_sticky(&self, row: u32, col: u32) -> bool {
        row < self.rows || col < self.cols
    }

    /// Stacking tier for the coordinate under this configuration.
    pub fn tier(&self, row: u32, col: u32) -> Tier {
        match (row < self.rows, col < self.cols) {
            (true, true) => Tier::Corner,
            (true, false) | (false, true) => Tier::Edge,
            (false, false) => Tier::Base,
        }
    }
}

impl AttributeTable {
    /// Recompute every displayed frame from its base frame for the given
    /// sticky configuration and scroll offset, and assign stacking tiers.
    ///
    /// Sticky rows are shifted by `offset.y`, sticky columns by `offset.x`;
    /// the adjustments are independent and additive, so corner cells shift
    /// in both axes. Cells outside both bands keep their base frame exactly.
    ///
    /// Always starts from base frames, never from previously shifted ones,
    /// so repeated application at a fixed offset is idempotent.
    pub fn apply_sticky(&mut self, sticky: StickyConfig, offset: Point) {
        for entry in self.rows.iter_mut().flatten() {
            let dx = if entry.col < sticky.cols { offset.x } else { 0.0 };
            let dy = if entry.row < sticky.rows { offset.y } else { 0.0 };
            entry.frame = entry.base_frame.shifted(dx, dy);
            entry.tier = sticky.tier(entry.row, entry.col);
        }
    }

    /// Horizontal extent of the sticky column band at base geometry: the
    /// rightmost base-frame edge over all cells with `col < sticky.cols`.
    /// Hosts use this to keep scrolled content reachable past the pinned
    /// region.
    pub fn sticky_width(&self, sticky: StickyConfig) -> f32 {
        self.entries()
            .filter(|e| e.col < sticky.cols)
            .map(|e| e.base_frame.max_x())
            .fold(0.0, f32::max)
    }

    /// Vertical extent of the sticky row band at base geometry.
    pub fn sticky_height(&self, sticky: StickyConfig) -> f32 {
        self.entries()
            .filter(|e| e.row < sticky.rows)
            .map(|e| e.base_frame.max_y())
            .fold(0.0, f32::max)
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
    use crate::geometry::{Size, SnapMode};
    use crate::source::UniformGrid;

    fn build_2x2() -> AttributeTable {
        AttributeTable::build(
            &UniformGrid::new(2, 2, Size::new(100.0, 50.0)),
            SnapMode::Pixel,
        )
    }

    #[test]
    fn test_zero_offset_keeps_base_frames() {
        let mut table = build_2x2();
        table.apply_sticky(StickyConfig::new(1, 1), Point::ZERO);
        for entry in table.entries() {
            assert_eq!(entry.frame, entry.base_frame);
        }
    }

    #[test]
    fn test_tier_assignment() {
        let sticky = StickyConfig::new(1, 1);
        assert_eq!(sticky.tier(0, 0), Tier::Corner);
        assert_eq!(sticky.tier(0, 5), Tier::Edge);
        assert_eq!(sticky.tier(5, 0), Tier::Edge);
        assert_eq!(sticky.tier(5, 5), Tier::Base);
        assert!(Tier::Corner > Tier::Edge);
        assert!(Tier::Edge > Tier::Base);
    }

    #[test]
    fn test_band_extents() {
        let table = build_2x2();
        let sticky = StickyConfig::new(1, 1);
        assert_eq!(table.sticky_width(sticky), 100.0);
        assert_eq!(table.sticky_height(sticky), 50.0);
        assert_eq!(table.sticky_width(StickyConfig::default()), 0.0);
    }

    #[test]
    fn test_oversized_sticky_counts_pin_everything() {
        let mut table = build_2x2();
        table.apply_sticky(StickyConfig::new(10, 10), Point::new(7.0, 3.0));
        for entry in table.entries() {
            assert_eq!(entry.tier, Tier::Corner);
            assert_eq!(entry.frame.x, entry.base_frame.x + 7.0);
            assert_eq!(entry.frame.y, entry.base_frame.y + 3.0);
        }
    }
}
