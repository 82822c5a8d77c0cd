//! Command implementations

pub mod hints;
pub mod query;
pub mod simple;

pub use hints::{HintsConfig, HintsResult, fetch_hints, list_corpora};
pub use query::{QueryResult, build_grid, run_query};
pub use simple::run_simple;
