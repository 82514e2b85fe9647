//! Game of Life - Conway's cellular automaton on a toroidal grid.
//!
//! This crate provides the simulation engine that a renderer drives: it owns
//! the cell grid, computes generations and exposes the cells as a flat,
//! read-only sequence plus point mutation for user input.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and seeding for universes
//! - `compute`: Grid storage, B3/S23 stepping and the `Universe` handle
//!
//! # Example
//!
//! ```rust
//! use game_of_life::{
//!     compute::{Cell, Universe},
//!     schema::{Pattern, Seed},
//! };
//!
//! let seed = Seed::new(Pattern::Custom {
//!     cells: vec![(2, 1), (2, 2), (2, 3)],
//! });
//! let mut universe = Universe::with_seed(5, 5, &seed).unwrap();
//!
//! universe.step();
//! assert_eq!(universe.get(1, 2), Cell::Alive);
//!
//! universe.toggle(-1, -1);
//! assert_eq!(universe.get(4, 4), Cell::Alive);
//! println!("{universe}");
//! ```

pub mod compute;
pub mod schema;
pub mod timer;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use compute::{Cell, Grid, GridError, Stepper, Universe, UniverseStats};
pub use schema::{ConfigError, Pattern, Seed, UniverseConfig};
