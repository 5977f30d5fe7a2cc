//! Layout input sources: grid shape and per-cell sizes.
//!
//! The engine never owns cell sizes; the host supplies them through a
//! [`LayoutSource`]. The provider must be deterministic for a given geometry
//! generation (it is queried exactly once per coordinate per rebuild), and
//! inconsistent answers across queries produce an inconsistent table.

use std::collections::HashMap;

use crate::error::{GridlayError, Result};
use crate::geometry::Size;

/// Default column width in pixels at 100% zoom.
pub const DEFAULT_COL_WIDTH: f32 = 64.0;

/// Default row height in pixels at 100% zoom.
pub const DEFAULT_ROW_HEIGHT: f32 = 20.0;

/// Shape and size provider for a logical grid.
///
/// Rows are `0..row_count()`; row `r` has columns `0..column_count(r)`.
/// Rows may have different column counts. `cell_size` returning `None` for
/// an in-range coordinate is a contract violation by the host, not by the
/// engine: the builder logs it and substitutes a zero-size cell so the scan
/// still terminates.
pub trait LayoutSource {
    fn row_count(&self) -> u32;

    fn column_count(&self, row: u32) -> u32;

    fn cell_size(&self, row: u32, col: u32) -> Option<Size>;
}

/// A grid where every cell has the same size. Mostly useful for tests and
/// fixed-geometry hosts.
#[derive(Debug, Clone, Copy)]
pub struct UniformGrid {
    pub rows: u32,
    pub cols: u32,
    pub cell: Size,
}

impl UniformGrid {
    pub fn new(rows: u32, cols: u32, cell: Size) -> Self {
        Self { rows, cols, cell }
    }
}

impl LayoutSource for UniformGrid {
    fn row_count(&self) -> u32 {
        self.rows
    }

    fn column_count(&self, _row: u32) -> u32 {
        self.cols
    }

    fn cell_size(&self, _row: u32, _col: u32) -> Option<Size> {
        Some(self.cell)
    }
}

/// A grid sized per axis: one width per column, one height per row, with
/// defaults for unlisted indices.
///
/// Hidden rows/columns are modeled by an explicit 0.0 entry.
#[derive(Debug, Clone, Default)]
pub struct AxisGrid {
    pub rows: u32,
    pub cols: u32,
    pub col_widths: HashMap<u32, f32>,
    pub row_heights: HashMap<u32, f32>,
}

impl AxisGrid {
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            col_widths: HashMap::new(),
            row_heights: HashMap::new(),
        }
    }

    pub fn set_col_width(&mut self, col: u32, width: f32) {
        self.col_widths.insert(col, width);
    }

    pub fn set_row_height(&mut self, row: u32, height: f32) {
        self.row_heights.insert(row, height);
    }
}

impl LayoutSource for AxisGrid {
    fn row_count(&self) -> u32 {
        self.rows
    }

    fn column_count(&self, _row: u32) -> u32 {
        self.cols
    }

    fn cell_size(&self, row: u32, col: u32) -> Option<Size> {
        let width = self
            .col_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COL_WIDTH);
        let height = self
            .row_heights
            .get(&row)
            .copied()
            .unwrap_or(DEFAULT_ROW_HEIGHT);
        Some(Size::new(width, height))
    }
}

/// Walk the full shape of a source and fail on the first contract violation.
///
/// Optional up-front check for hosts that prefer a hard error over the
/// builder's log-and-substitute-zero behavior.
///
/// # Errors
/// Returns [`GridlayError::SizeProvider`] if `cell_size` returns `None` for
/// an in-range coordinate, or [`GridlayError::NegativeSize`] if either
/// dimension is negative.
pub fn validate_source(source: &impl LayoutSource) -> Result<()> {
    for row in 0..source.row_count() {
        for col in 0..source.column_count(row) {
            match source.cell_size(row, col) {
                None => return Err(GridlayError::SizeProvider { row, col }),
                Some(size) if size.width < 0.0 || size.height < 0.0 => {
                    return Err(GridlayError::NegativeSize { row, col });
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
