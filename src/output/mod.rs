//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_corpora, print_errors, print_grid, print_hints, print_query, print_query_json,
    with_spinner,
};
