//! Read access and point mutation for rendering/input shells.

use super::{Cell, Grid};

/// Flip the cell at the wrapped `(row, col)`.
pub fn toggle(grid: &mut Grid, row: i64, col: i64) {
    let idx = grid.index(row, col);
    grid.cells_mut()[idx].toggle();
}

/// `(width, height)` of the grid.
#[inline]
pub fn dimensions(grid: &Grid) -> (usize, usize) {
    (grid.width(), grid.height())
}

/// Row-major view of the latest committed generation.
#[inline]
pub fn snapshot(grid: &Grid) -> &[Cell] {
    grid.as_slice()
}

/// Same view as raw bytes (`0` = dead, `1` = alive).
#[inline]
pub fn as_bytes(grid: &Grid) -> &[u8] {
    bytemuck::cast_slice(grid.as_slice())
}

/// Mark each listed `(row, col)` alive.
pub fn set_alive(grid: &mut Grid, cells: &[(i64, i64)]) {
    for &(row, col) in cells {
        grid.set(row, col, Cell::Alive);
    }
}
