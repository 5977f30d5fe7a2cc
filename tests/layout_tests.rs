//! Attribute table builder tests
//!
//! Covers the row-major build scan: entry counts, cumulative frame
//! invariants, the last-column row-height policy, content extent, pixel
//! snapping, and degenerate shapes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use gridlay::{AttributeTable, LayoutSource, Size, SnapMode, Tier, UniformGrid};

/// A grid described row by row: each inner vec is one row's cell sizes.
struct RaggedGrid {
    rows: Vec<Vec<Size>>,
}

impl LayoutSource for RaggedGrid {
    fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    fn column_count(&self, row: u32) -> u32 {
        self.rows.get(row as usize).map_or(0, |r| r.len() as u32)
    }

    fn cell_size(&self, row: u32, col: u32) -> Option<Size> {
        self.rows.get(row as usize)?.get(col as usize).copied()
    }
}

// ============================================================================
// ENTRY COVERAGE
// ============================================================================

#[test]
fn test_one_entry_per_coordinate() {
    let table = AttributeTable::build(
        &UniformGrid::new(5, 7, Size::new(80.0, 24.0)),
        SnapMode::Pixel,
    );

    assert_eq!(table.len(), 35);
    let mut seen = std::collections::HashSet::new();
    for entry in table.entries() {
        assert!(seen.insert((entry.row, entry.col)), "duplicate entry");
    }
    for row in 0..5 {
        for col in 0..7 {
            assert!(table.get(row, col).is_some(), "gap at ({row}, {col})");
        }
    }
}

#[test]
fn test_ragged_rows_cover_their_own_columns() {
    let grid = RaggedGrid {
        rows: vec![
            vec![Size::new(100.0, 50.0); 3],
            vec![Size::new(100.0, 50.0); 1],
            vec![Size::new(100.0, 50.0); 2],
        ],
    };
    let table = AttributeTable::build(&grid, SnapMode::Pixel);

    assert_eq!(table.len(), 6);
    assert!(table.get(0, 2).is_some());
    assert!(table.get(1, 1).is_none());
    assert!(table.get(2, 1).is_some());
}

#[test]
fn test_all_entries_start_at_base_tier() {
    let table = AttributeTable::build(
        &UniformGrid::new(3, 3, Size::new(10.0, 10.0)),
        SnapMode::Pixel,
    );
    assert!(table.entries().all(|e| e.tier == Tier::Base));
}

// ============================================================================
// CUMULATIVE FRAME INVARIANTS
// ============================================================================

#[test]
fn test_no_gap_no_overlap_within_row() {
    let grid = RaggedGrid {
        rows: vec![vec![
            Size::new(64.0, 20.0),
            Size::new(120.0, 20.0),
            Size::new(32.0, 20.0),
            Size::new(200.0, 20.0),
        ]],
    };
    let table = AttributeTable::build(&grid, SnapMode::None);

    for col in 0..3u32 {
        let a = table.get(0, col).unwrap().base_frame;
        let b = table.get(0, col + 1).unwrap().base_frame;
        assert_eq!(b.x, a.x + a.width);
        assert_eq!(b.y, a.y);
    }
}

#[test]
fn test_rows_stack_by_last_column_height() {
    // Heterogeneous heights inside row 0: the *last* column's height (30)
    // becomes the row advance, not the max (90).
    let grid = RaggedGrid {
        rows: vec![
            vec![
                Size::new(100.0, 90.0),
                Size::new(100.0, 60.0),
                Size::new(100.0, 30.0),
            ],
            vec![Size::new(100.0, 40.0); 3],
        ],
    };
    let table = AttributeTable::build(&grid, SnapMode::None);

    assert_eq!(table.get(1, 0).unwrap().base_frame.y, 30.0);
    assert_eq!(table.content_extent(), Size::new(300.0, 70.0));
}

#[test]
fn test_extent_is_last_cells_corner() {
    let table = AttributeTable::build(
        &UniformGrid::new(4, 6, Size::new(100.0, 50.0)),
        SnapMode::Pixel,
    );
    let last = table.get(3, 5).unwrap().base_frame;
    assert_eq!(
        table.content_extent(),
        Size::new(last.x + last.width, last.y + last.height)
    );
}

// ============================================================================
// DEGENERATE SHAPES
// ============================================================================

#[test]
fn test_zero_rows() {
    let table = AttributeTable::build(
        &UniformGrid::new(0, 4, Size::new(100.0, 50.0)),
        SnapMode::Pixel,
    );
    assert!(table.is_empty());
    assert_eq!(table.content_extent(), Size::ZERO);
}

#[test]
fn test_zero_columns_everywhere() {
    let table = AttributeTable::build(
        &UniformGrid::new(4, 0, Size::new(100.0, 50.0)),
        SnapMode::Pixel,
    );
    assert!(table.is_empty());
    assert_eq!(table.content_extent(), Size::ZERO);
}

#[test]
fn test_empty_middle_row_advances_nothing() {
    let grid = RaggedGrid {
        rows: vec![
            vec![Size::new(100.0, 50.0); 2],
            vec![],
            vec![Size::new(100.0, 50.0); 2],
        ],
    };
    let table = AttributeTable::build(&grid, SnapMode::Pixel);

    assert_eq!(table.len(), 4);
    // Row 1 contributed no height; row 2 starts where row 1 would have.
    assert_eq!(table.get(2, 0).unwrap().base_frame.y, 50.0);
}

#[test]
fn test_trailing_empty_row_does_not_collapse_extent() {
    let grid = RaggedGrid {
        rows: vec![vec![Size::new(100.0, 50.0); 3], vec![]],
    };
    let table = AttributeTable::build(&grid, SnapMode::Pixel);
    assert_eq!(table.content_extent(), Size::new(300.0, 50.0));
}

// ============================================================================
// SNAPPING
// ============================================================================

#[test]
fn test_pixel_snap_keeps_adjacent_cells_seamless() {
    let table = AttributeTable::build(
        &UniformGrid::new(2, 8, Size::new(37.7, 19.3)),
        SnapMode::Pixel,
    );

    for col in 0..7u32 {
        let a = table.get(0, col).unwrap().base_frame;
        let b = table.get(0, col + 1).unwrap().base_frame;
        assert_eq!(a.x + a.width, b.x, "seam between columns {col} and its neighbor");
        assert_eq!(a.x, a.x.round());
        assert_eq!(a.width, a.width.round());
    }
    let top = table.get(0, 0).unwrap().base_frame;
    let bottom = table.get(1, 0).unwrap().base_frame;
    assert_eq!(top.y + top.height, bottom.y);
}

#[test]
fn test_snap_none_keeps_exact_positions() {
    let table = AttributeTable::build(
        &UniformGrid::new(1, 2, Size::new(37.7, 19.3)),
        SnapMode::None,
    );
    assert_eq!(table.get(0, 1).unwrap().base_frame.x, 37.7);
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[test]
fn test_cell_attributes_serde_round_trip() {
    let table = AttributeTable::build(
        &UniformGrid::new(2, 2, Size::new(100.0, 50.0)),
        SnapMode::Pixel,
    );
    let cell = *table.get(1, 1).unwrap();
    let json = serde_json::to_string(&cell).unwrap();
    let back: gridlay::CellAttributes = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cell);
}
