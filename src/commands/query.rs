//! Query derivation command
//!
//! Builds a grid from row arguments like `crane:-YG--` and derives its
//! constraint query.

use crate::core::{Grid, GridError};
use crate::query::{HintQuery, derive};

/// Split a row argument into word and feedback
///
/// `crane:-YG--` and `crane=-YG--` carry feedback; a bare `crane` has none
/// and every letter stays gray.
#[must_use]
pub fn split_row(arg: &str) -> (&str, &str) {
    arg.split_once([':', '='])
        .map_or((arg.trim(), ""), |(word, feedback)| {
            (word.trim(), feedback.trim())
        })
}

/// Build a default-size grid from row arguments
///
/// # Errors
///
/// Returns the first `GridError` from a malformed row.
pub fn build_grid<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
    let mut grid = Grid::new();
    for row in rows {
        let (word, feedback) = split_row(row.as_ref());
        grid.push_row(word, feedback)?;
    }
    Ok(grid)
}

/// Result of the query command
pub struct QueryResult {
    pub grid: Grid,
    pub query: HintQuery,
}

/// Build the grid from row arguments and derive its query
///
/// # Errors
///
/// Returns an error if a row can't be typed into the grid. Incomplete or
/// contradictory input is not an error here; it is reported in
/// `QueryResult::query.errors`.
pub fn run_query<S: AsRef<str>>(rows: &[S]) -> Result<QueryResult, GridError> {
    let grid = build_grid(rows)?;
    let query = derive(&grid);
    Ok(QueryResult { grid, query })
}
