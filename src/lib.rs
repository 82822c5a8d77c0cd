//! Wordle Hints
//!
//! Turns a Wordle guess grid into per-letter constraints and asks a hint
//! service for the words that satisfy them.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_hints::core::Grid;
//! use wordle_hints::query::derive;
//!
//! // Type a guess and mark it: S green, T yellow, the rest gray
//! let mut grid = Grid::new();
//! grid.push_row("stare", "GY---").unwrap();
//!
//! let query = derive(&grid);
//! assert!(query.is_submittable());
//! assert_eq!(query.constraints.len(), 5);
//! ```

// Core domain types
pub mod core;

// Constraint derivation
pub mod query;

// Hint service access
pub mod client;

// Configuration file handling
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
