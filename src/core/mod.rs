//! Core domain types for the hint grid
//!
//! This module contains the grid, its cell statuses and the per-letter
//! constraints derived from them. Nothing here performs I/O.

mod constraint;
mod grid;
mod status;

pub use constraint::LetterConstraint;
pub use grid::{Cell, Grid, GridError, LIMIT, NUM_LETTERS, NUM_TRIES};
pub use status::Status;
