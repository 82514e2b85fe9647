//! Universe - engine handle owned by a rendering/input shell.
//!
//! Bundles one [`Grid`] with its [`Stepper`] and a generation counter. The
//! shell decides when to call [`Universe::step`]; nothing here runs on its
//! own.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Cell, Grid, GridError, Stepper, accessor, signed_dimensions};
use crate::schema::{Seed, UniverseConfig};
use crate::timer::Timer;

/// Game of Life engine instance.
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    stepper: Stepper,
    generation: u64,
}

impl Universe {
    /// Create a universe seeded with the default pattern.
    pub fn create(width: i64, height: i64) -> Result<Self, GridError> {
        let (w, h) = signed_dimensions(width, height)?;
        Self::with_seed(w, h, &Seed::default())
    }

    /// Create a universe from an explicit seed.
    pub fn with_seed(width: usize, height: usize, seed: &Seed) -> Result<Self, GridError> {
        let grid = seed.generate(width, height)?;
        log::info!("Setting universe with {width}x{height} cells.");
        Ok(Self::from_grid(grid))
    }

    /// Create a universe from a configuration.
    pub fn from_config(config: &UniverseConfig) -> Result<Self, GridError> {
        Self::with_seed(config.width, config.height, &config.seed)
    }

    /// Wrap an existing grid at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            stepper: Stepper::for_grid(&grid),
            grid,
            generation: 0,
        }
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let _timer = Timer::new("Universe::step");
        self.stepper.advance(&mut self.grid);
        self.generation += 1;
    }

    /// Advance `steps` generations.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Row-major cells of the current generation.
    #[inline]
    pub fn read(&self) -> &[Cell] {
        accessor::snapshot(&self.grid)
    }

    /// Current generation as `0`/`1` bytes.
    #[inline]
    pub fn read_bytes(&self) -> &[u8] {
        accessor::as_bytes(&self.grid)
    }

    pub fn toggle(&mut self, row: i64, col: i64) {
        accessor::toggle(&mut self.grid, row, col);
    }

    pub fn get(&self, row: i64, col: i64) -> Cell {
        self.grid.get(row, col)
    }

    /// Mark each listed `(row, col)` alive.
    pub fn set_alive(&mut self, cells: &[(i64, i64)]) {
        accessor::set_alive(&mut self.grid, cells);
    }

    /// Re-seed in place, keeping dimensions and resetting the generation.
    pub fn reset(&mut self, seed: &Seed) -> Result<(), GridError> {
        let (width, height) = self.dimensions();
        self.grid = seed.generate(width, height)?;
        self.generation = 0;
        log::debug!("Universe reset: {:?}", seed.pattern);
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        accessor::dimensions(&self.grid)
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> UniverseStats {
        UniverseStats::from_universe(self)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}

/// Universe statistics for monitoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseStats {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub population: usize,
    /// Fraction of live cells.
    pub density: f32,
}

impl UniverseStats {
    /// Compute statistics from a universe.
    pub fn from_universe(universe: &Universe) -> Self {
        let grid = universe.grid();
        let population = grid.population();
        Self {
            width: grid.width(),
            height: grid.height(),
            generation: universe.generation(),
            population,
            density: population as f32 / grid.len() as f32,
        }
    }
}
