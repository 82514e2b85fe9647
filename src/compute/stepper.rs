//! Generation stepping under Conway's B3/S23 rule.
//!
//! The next generation is always computed from an untouched copy of the
//! current one: [`Stepper`] writes into its own back buffer and swaps it into
//! the grid only once every cell is done.

#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;

use super::{Cell, Grid};

/// Count live cells among the eight toroidal neighbors of `(row, col)`.
///
/// Each axis wraps independently. Offsets are taken as `len - 1`, `0` and
/// `1` per axis and a pair is skipped when both wrapped deltas are zero, so
/// on an axis of length 1 the `-1` offset collapses onto `0`: a live 1x1
/// cell counts itself 5 times and a 1xN strip skips two of its nine pairs.
/// On axes of length 2 the same neighbor is reached through both the `-1`
/// and `+1` offsets and counted twice.
pub fn live_neighbor_count(grid: &Grid, row: i64, col: i64) -> u8 {
    let r = row.rem_euclid(grid.height() as i64) as usize;
    let c = col.rem_euclid(grid.width() as i64) as usize;
    count_neighbors(grid.as_slice(), grid.width(), grid.height(), r, c)
}

/// B3/S23 transition for one cell.
#[inline]
pub fn next_cell(cell: Cell, live_neighbors: u8) -> Cell {
    match (cell, live_neighbors) {
        // Survival
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
        // Under- or overpopulation
        (Cell::Alive, _) => Cell::Dead,
        // Birth
        (Cell::Dead, 3) => Cell::Alive,
        (Cell::Dead, _) => Cell::Dead,
    }
}

/// Compute the next generation of `grid` without modifying it.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for row in 0..grid.height() as i64 {
        for col in 0..grid.width() as i64 {
            let n = live_neighbor_count(grid, row, col);
            next.set(row, col, next_cell(grid.get(row, col), n));
        }
    }
    next
}

/// Buffered in-place stepper.
///
/// Keeps a back buffer between calls so repeated stepping of the same grid
/// does not allocate.
#[derive(Debug, Default)]
pub struct Stepper {
    next: Vec<Cell>,
}

impl Stepper {
    pub fn new() -> Self {
        Self { next: Vec::new() }
    }

    /// Pre-size the back buffer for a grid.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            next: vec![Cell::Dead; grid.len()],
        }
    }

    /// Replace `grid` with its next generation.
    pub fn advance(&mut self, grid: &mut Grid) {
        let width = grid.width();
        let height = grid.height();

        self.next.resize(grid.len(), Cell::Dead);

        let current = grid.as_slice();

        #[cfg(not(target_arch = "wasm32"))]
        {
            // Native: rows in parallel, each writing only its own chunk
            self.next
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(row, out)| fill_row(current, width, height, row, out));
        }

        #[cfg(target_arch = "wasm32")]
        {
            for (row, out) in self.next.chunks_mut(width).enumerate() {
                fill_row(current, width, height, row, out);
            }
        }

        std::mem::swap(grid.cells_mut(), &mut self.next);
    }

    /// Advance `grid` by `steps` generations.
    pub fn run(&mut self, grid: &mut Grid, steps: u64) {
        for _ in 0..steps {
            self.advance(grid);
        }
    }
}

fn fill_row(current: &[Cell], width: usize, height: usize, row: usize, out: &mut [Cell]) {
    let base = row * width;
    for (col, slot) in out.iter_mut().enumerate() {
        let n = count_neighbors(current, width, height, row, col);
        *slot = next_cell(current[base + col], n);
    }
}

#[inline]
fn count_neighbors(cells: &[Cell], width: usize, height: usize, row: usize, col: usize) -> u8 {
    let mut count = 0;

    for delta_row in [height - 1, 0, 1] {
        for delta_col in [width - 1, 0, 1] {
            if delta_row == 0 && delta_col == 0 {
                continue;
            }

            let r = (row + delta_row) % height;
            let c = (col + delta_col) % width;
            count += cells[r * width + c] as u8;
        }
    }

    count
}
