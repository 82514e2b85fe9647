//! Fixed-size toroidal cell grid.
//!
//! Cells are stored row-major in a flat buffer of length `width * height`.
//! Every coordinate accessor wraps both axes with Euclidean modulo, so any
//! `i64` row or column maps to a valid cell.

use std::fmt;

use super::Cell;

/// Grid construction errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i64, height: i64 },
}

/// Toroidal 2D grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid, filling each cell from `seed(index)` in row-major order.
    pub fn new<F>(width: usize, height: usize, seed: F) -> Result<Self, GridError>
    where
        F: FnMut(usize) -> Cell,
    {
        let size = checked_size(width, height).ok_or_else(|| invalid_dimension(width, height))?;

        Ok(Self {
            width,
            height,
            cells: (0..size).map(seed).collect(),
        })
    }

    /// Create an all-dead grid.
    pub fn empty(width: usize, height: usize) -> Result<Self, GridError> {
        Self::new(width, height, |_| Cell::Dead)
    }

    /// Create a grid from an existing row-major cell buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        match checked_size(width, height) {
            Some(size) if size == cells.len() => Ok(Self {
                width,
                height,
                cells,
            }),
            _ => Err(invalid_dimension(width, height)),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of a wrapped `(row, col)`.
    #[inline]
    pub fn index(&self, row: i64, col: i64) -> usize {
        let r = row.rem_euclid(self.height as i64) as usize;
        let c = col.rem_euclid(self.width as i64) as usize;
        r * self.width + c
    }

    #[inline]
    pub fn get(&self, row: i64, col: i64) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: i64, col: i64, value: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Read-only view of the row-major cell sequence.
    #[inline]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Vec<Cell> {
        &mut self.cells
    }
}

/// Convert signed dimensions, rejecting zero or negative values.
pub fn signed_dimensions(width: i64, height: i64) -> Result<(usize, usize), GridError> {
    match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
        _ => Err(GridError::InvalidDimension { width, height }),
    }
}

fn invalid_dimension(width: usize, height: usize) -> GridError {
    GridError::InvalidDimension {
        width: i64::try_from(width).unwrap_or(i64::MAX),
        height: i64::try_from(height).unwrap_or(i64::MAX),
    }
}

fn checked_size(width: usize, height: usize) -> Option<usize> {
    if width == 0 || height == 0 || width > i64::MAX as usize || height > i64::MAX as usize {
        return None;
    }
    width.checked_mul(height)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                let symbol = match cell {
                    Cell::Alive => '◼',
                    Cell::Dead => '◻',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_grid() {
        let grid = Grid::empty(8, 4).unwrap();
        assert_eq!(grid.width(), 8);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.len(), 32);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::empty(0, 4),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::empty(4, 0).is_err());
    }

    #[test]
    fn test_signed_dimensions() {
        assert_eq!(
            signed_dimensions(-3, 5),
            Err(GridError::InvalidDimension {
                width: -3,
                height: 5
            })
        );
        assert!(signed_dimensions(5, 0).is_err());
        assert_eq!(signed_dimensions(5, 7), Ok((5, 7)));
    }

    #[test]
    fn test_overflowing_dimension_reports_saturated_size() {
        let err = Grid::empty(usize::MAX, 2).unwrap_err();
        assert_eq!(
            err,
            GridError::InvalidDimension {
                width: i64::MAX,
                height: 2
            }
        );
        assert!(!err.to_string().contains('-'));
    }

    #[test]
    fn test_seed_receives_row_major_index() {
        let grid = Grid::new(4, 3, |i| Cell::from(i == 5)).unwrap();
        assert_eq!(grid.get(1, 1), Cell::Alive);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::empty(4, 3).unwrap();

        assert_eq!(grid.index(0, 0), 0);
        assert_eq!(grid.index(2, 3), 11);
        assert_eq!(grid.index(1, 0), 4);
        assert_eq!(grid.index(0, 1), 1);
    }

    #[test]
    fn test_index_wraps() {
        let grid = Grid::empty(4, 3).unwrap();

        assert_eq!(grid.index(-1, 0), grid.index(2, 0));
        assert_eq!(grid.index(0, -1), grid.index(0, 3));
        assert_eq!(grid.index(3, 4), grid.index(0, 0));
        assert_eq!(grid.index(-7, -9), grid.index(2, 3));
        assert!(grid.index(i64::MIN, i64::MAX) < grid.len());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::empty(5, 5).unwrap();
        grid.set(-1, 2, Cell::Alive);

        assert_eq!(grid.get(4, 2), Cell::Alive);
        assert_eq!(grid.get(-1, 2), Cell::Alive);
        assert_eq!(grid.population(), 1);

        grid.set(4, 2, Cell::Dead);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_from_cells_length_mismatch() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Dead; 3]).is_err());
        assert!(Grid::from_cells(2, 2, vec![Cell::Dead; 4]).is_ok());
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::empty(3, 2).unwrap();
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 2, Cell::Alive);

        assert_eq!(grid.to_string(), "◻◼◻\n◻◻◼\n");
    }
}
