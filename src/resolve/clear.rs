//! Reset a table to its unstyled baseline.

use tracing::debug;

use crate::grid::{Cell, Grid};

/// Drop shading and fonts from every cell, leaving each one styled exactly
/// like a freshly created cell. Text is kept.
pub fn clear(grid: &mut Grid) {
    grid.cells_mut().for_each(Cell::reset_style);
    debug!(
        rows = grid.row_count(),
        cols = grid.column_count(),
        "cleared table styling"
    );
}
