//! Seed types for initializing a universe.

use serde::{Deserialize, Serialize};

use crate::compute::{Cell, Grid, GridError};

/// Complete seed specification for universe initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Modulo {
                divisors: vec![3, 7],
            },
        }
    }
}

/// Initial patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// Every cell dead.
    Empty,
    /// Cell `i` (row-major) is alive when `i` is divisible by any divisor.
    /// Zero divisors are ignored.
    Modulo { divisors: Vec<usize> },
    /// Uniform random noise.
    Noise {
        /// Probability of a cell being alive (0.0-1.0).
        density: f32,
        /// Random seed.
        seed: u64,
    },
    /// Explicit list of live `(row, col)` cells, wrapped onto the grid.
    Custom { cells: Vec<(i64, i64)> },
    /// Plaintext art: `O`, `*` or `#` is alive, anything else dead.
    /// Row `k` of `rows` is placed at `origin.0 + k`, wrapped onto the grid.
    Text {
        origin: (i64, i64),
        rows: Vec<String>,
    },
}

impl Seed {
    pub fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    /// Build a grid of the given size from this seed.
    pub fn generate(&self, width: usize, height: usize) -> Result<Grid, GridError> {
        match &self.pattern {
            Pattern::Empty => Grid::empty(width, height),
            Pattern::Modulo { divisors } => Grid::new(width, height, |i| {
                Cell::from(divisors.iter().any(|&d| d != 0 && i % d == 0))
            }),
            Pattern::Noise { density, seed } => {
                // Simple LCG PRNG for deterministic noise
                let mut state = *seed;
                let threshold = density.clamp(0.0, 1.0);
                Grid::new(width, height, |_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    let sample = (state >> 40) as f32 / (1u64 << 24) as f32;
                    Cell::from(sample < threshold)
                })
            }
            Pattern::Custom { cells } => {
                let mut grid = Grid::empty(width, height)?;
                for &(row, col) in cells {
                    grid.set(row, col, Cell::Alive);
                }
                Ok(grid)
            }
            Pattern::Text { origin, rows } => {
                let mut grid = Grid::empty(width, height)?;
                for (dr, line) in rows.iter().enumerate() {
                    for (dc, ch) in line.chars().enumerate() {
                        if matches!(ch, 'O' | '*' | '#') {
                            grid.set(origin.0 + dr as i64, origin.1 + dc as i64, Cell::Alive);
                        }
                    }
                }
                Ok(grid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_pattern() {
        let grid = Seed::default().generate(16, 16).unwrap();

        for (i, &cell) in grid.as_slice().iter().enumerate() {
            assert_eq!(cell.is_alive(), i % 3 == 0 || i % 7 == 0, "cell {i}");
        }
    }

    #[test]
    fn test_modulo_ignores_zero() {
        let seed = Seed::new(Pattern::Modulo {
            divisors: vec![0, 4],
        });
        let grid = seed.generate(4, 2).unwrap();
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_noise_deterministic() {
        let seed = Seed::new(Pattern::Noise {
            density: 0.5,
            seed: 42,
        });
        let a = seed.generate(32, 32).unwrap();
        let b = seed.generate(32, 32).unwrap();
        assert_eq!(a, b);

        let other = Seed::new(Pattern::Noise {
            density: 0.5,
            seed: 43,
        })
        .generate(32, 32)
        .unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn test_noise_density_bounds() {
        let empty = Seed::new(Pattern::Noise {
            density: 0.0,
            seed: 7,
        })
        .generate(16, 16)
        .unwrap();
        assert_eq!(empty.population(), 0);

        let full = Seed::new(Pattern::Noise {
            density: 1.0,
            seed: 7,
        })
        .generate(16, 16)
        .unwrap();
        assert_eq!(full.population(), 256);

        let half = Seed::new(Pattern::Noise {
            density: 0.5,
            seed: 7,
        })
        .generate(64, 64)
        .unwrap();
        let pop = half.population();
        assert!(pop > 1500 && pop < 2600, "population {pop}");
    }

    #[test]
    fn test_custom_cells_wrap() {
        let seed = Seed::new(Pattern::Custom {
            cells: vec![(0, 0), (-1, -1)],
        });
        let grid = seed.generate(4, 4).unwrap();

        assert_eq!(grid.get(0, 0), Cell::Alive);
        assert_eq!(grid.get(3, 3), Cell::Alive);
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_text_pattern() {
        let seed = Seed::new(Pattern::Text {
            origin: (1, 1),
            rows: vec![".O.".into(), "..O".into(), "OOO".into()],
        });
        let grid = seed.generate(6, 6).unwrap();

        assert_eq!(grid.population(), 5);
        assert_eq!(grid.get(1, 2), Cell::Alive);
        assert_eq!(grid.get(2, 3), Cell::Alive);
        assert_eq!(grid.get(3, 1), Cell::Alive);
        assert_eq!(grid.get(1, 1), Cell::Dead);
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        assert!(Seed::default().generate(0, 8).is_err());
        assert!(Seed::new(Pattern::Empty).generate(8, 0).is_err());
    }

    #[test]
    fn test_pattern_json_tag() {
        let json = r#"{"pattern":{"type":"Custom","cells":[[1,2]]}}"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(
            seed.pattern,
            Pattern::Custom {
                cells: vec![(1, 2)]
            }
        );
    }
}
