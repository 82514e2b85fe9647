//! Compute module - Grid storage and generation stepping.

pub mod accessor;
mod cell;
mod grid;
mod stepper;
mod universe;

pub use cell::*;
pub use grid::*;
pub use stepper::*;
pub use universe::*;
