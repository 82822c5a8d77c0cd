//! Guess grid state
//!
//! The grid mimics Wordle's input: letters are appended and removed strictly
//! left-to-right, row-major, and `active_id` always points at the next empty
//! cell. Statuses are changed only through [`Status::next`].

use super::Status;
use std::fmt;
use tracing::debug;

/// Number of guesses (rows) in a default grid
pub const NUM_TRIES: usize = 6;

/// Number of letters per guess (columns) in a default grid
pub const NUM_LETTERS: usize = 5;

/// Total number of cells in a default grid
pub const LIMIT: usize = NUM_TRIES * NUM_LETTERS;

/// A single grid cell
///
/// Invariant: `value` is `None` exactly when `status` is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: Option<char>,
    status: Status,
}

impl Cell {
    /// The uppercase letter in this cell, if any
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Error type for rejected grid edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    InvalidLetter(char),
    CellOutOfRange { index: usize, len: usize },
    InvalidFeedback(String),
    FeedbackLength { letters: usize, feedback: usize },
    RowTooLong { len: usize, max: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLetter(ch) => write!(f, "'{ch}' is not a letter"),
            Self::CellOutOfRange { index, len } => {
                write!(f, "Cell {index} is out of range (grid has {len} cells)")
            }
            Self::InvalidFeedback(s) => {
                write!(f, "Invalid feedback '{s}': use G/Y/- or 🟩🟨⬜")
            }
            Self::FeedbackLength { letters, feedback } => write!(
                f,
                "Feedback has {feedback} marks but the word has {letters} letters"
            ),
            Self::RowTooLong { len, max } => {
                write!(f, "Word has {len} letters, rows hold at most {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// The guess grid: `tries` rows of `letters` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tries: usize,
    letters: usize,
    cells: Vec<Cell>,
    active_id: usize,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty 6×5 grid
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimensions(NUM_TRIES, NUM_LETTERS)
    }

    /// Create an empty grid with custom dimensions
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn with_dimensions(tries: usize, letters: usize) -> Self {
        assert!(tries > 0 && letters > 0, "grid dimensions must be non-zero");
        Self {
            tries,
            letters,
            cells: vec![Cell::default(); tries * letters],
            active_id: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    /// Letters per row, also the ceiling for any letter's occurrence count
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> usize {
        self.letters
    }

    /// Number of filled cells, which is also the index of the next empty cell
    #[inline]
    #[must_use]
    pub const fn active_id(&self) -> usize {
        self.active_id
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by linear index
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Cells of row `row` (0-based)
    ///
    /// Returns `None` if the row is outside the grid.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.tries {
            return None;
        }
        let start = row * self.letters;
        Some(&self.cells[start..start + self.letters])
    }

    /// Number of completely filled rows
    #[inline]
    #[must_use]
    pub const fn rows_filled(&self) -> usize {
        self.active_id / self.letters
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.active_id == self.cells.len()
    }

    /// Append a letter at the next empty cell
    ///
    /// The letter is stored uppercase with status `Exclude`. Returns
    /// `Ok(false)` without changing anything when the grid is already full.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` if `letter` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Grid, Status};
    ///
    /// let mut grid = Grid::new();
    /// assert!(grid.append_letter('s').unwrap());
    /// assert_eq!(grid.cells()[0].value(), Some('S'));
    /// assert_eq!(grid.cells()[0].status(), Status::Exclude);
    /// assert!(grid.append_letter('3').is_err());
    /// ```
    pub fn append_letter(&mut self, letter: char) -> Result<bool, GridError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::InvalidLetter(letter));
        }
        if self.is_full() {
            return Ok(false);
        }

        self.cells[self.active_id] = Cell {
            value: Some(letter.to_ascii_uppercase()),
            status: Status::Exclude,
        };
        self.active_id += 1;
        Ok(true)
    }

    /// Clear the most recently appended letter
    ///
    /// Returns `false` if the grid was already empty.
    pub fn clear_last_letter(&mut self) -> bool {
        if self.active_id == 0 {
            return false;
        }

        self.active_id -= 1;
        self.cells[self.active_id] = Cell::default();
        true
    }

    /// Advance a cell's status through the cycle
    ///
    /// An empty cell is forced back to `Unknown`. Returns the new status.
    ///
    /// # Errors
    /// Returns `GridError::CellOutOfRange` if `index` is outside the grid.
    pub fn cycle_status(&mut self, index: usize) -> Result<Status, GridError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GridError::CellOutOfRange { index, len })?;

        cell.status = if cell.value.is_some() {
            cell.status.next()
        } else {
            Status::Unknown
        };
        Ok(cell.status)
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells.fill(Cell::default());
        self.active_id = 0;
    }

    /// Type a word and mark it with a feedback string
    ///
    /// Letters are appended one by one and each cell is then cycled until it
    /// shows the requested status. Pass an empty feedback to leave every
    /// letter at `Exclude`. A word shorter than a row leaves the row in
    /// progress. Returns the number of letters actually placed, which is less
    /// than the word length only when the grid fills up.
    ///
    /// # Errors
    /// Returns an error if the word contains a non-letter, is longer than a
    /// row, or the feedback is malformed or of a different length. The grid
    /// is unchanged on error.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::{Grid, Status};
    ///
    /// let mut grid = Grid::new();
    /// grid.push_row("crane", "-YG--").unwrap();
    /// assert_eq!(grid.active_id(), 5);
    /// assert_eq!(grid.cells()[1].status(), Status::Include);
    /// assert_eq!(grid.cells()[2].status(), Status::Actual);
    /// ```
    pub fn push_row(&mut self, word: &str, feedback: &str) -> Result<usize, GridError> {
        let letters: Vec<char> = word.chars().collect();
        if let Some(&bad) = letters.iter().find(|c| !c.is_ascii_alphabetic()) {
            return Err(GridError::InvalidLetter(bad));
        }
        if letters.len() > self.letters {
            return Err(GridError::RowTooLong {
                len: letters.len(),
                max: self.letters,
            });
        }

        let statuses = if feedback.is_empty() {
            vec![Status::Exclude; letters.len()]
        } else {
            let parsed = Status::parse_feedback(feedback)
                .ok_or_else(|| GridError::InvalidFeedback(feedback.to_string()))?;
            if parsed.len() != letters.len() {
                return Err(GridError::FeedbackLength {
                    letters: letters.len(),
                    feedback: parsed.len(),
                });
            }
            parsed
        };

        let mut placed = 0;
        for (letter, status) in letters.into_iter().zip(statuses) {
            if !self.append_letter(letter)? {
                break;
            }
            let index = self.active_id - 1;
            for _ in 0..status.steps_from_exclude().unwrap_or(0) {
                self.cycle_status(index)?;
            }
            placed += 1;
        }

        debug!(word, feedback, placed, active_id = self.active_id, "pushed row");
        Ok(placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(word: &str, feedback: &str) -> Grid {
        let mut grid = Grid::new();
        grid.push_row(word, feedback).unwrap();
        grid
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.cells().len(), LIMIT);
        assert_eq!(grid.active_id(), 0);
        assert!(grid.cells().iter().all(Cell::is_empty));
        assert!(grid.cells().iter().all(|c| c.status() == Status::Unknown));
    }

    #[test]
    fn append_uppercases_and_marks_exclude() {
        let mut grid = Grid::new();
        assert!(grid.append_letter('a').unwrap());
        assert!(grid.append_letter('B').unwrap());

        assert_eq!(grid.active_id(), 2);
        assert_eq!(grid.cells()[0].value(), Some('A'));
        assert_eq!(grid.cells()[1].value(), Some('B'));
        assert_eq!(grid.cells()[1].status(), Status::Exclude);
    }

    #[test]
    fn append_rejects_non_letters() {
        let mut grid = Grid::new();
        assert_eq!(grid.append_letter('1'), Err(GridError::InvalidLetter('1')));
        assert_eq!(grid.append_letter('é'), Err(GridError::InvalidLetter('é')));
        assert_eq!(grid.active_id(), 0);
    }

    #[test]
    fn append_ignored_when_full() {
        let mut grid = Grid::with_dimensions(1, 2);
        assert!(grid.append_letter('a').unwrap());
        assert!(grid.append_letter('b').unwrap());
        assert!(grid.is_full());

        assert!(!grid.append_letter('c').unwrap());
        assert_eq!(grid.active_id(), 2);
        assert_eq!(grid.cells()[1].value(), Some('B'));
    }

    #[test]
    fn clear_removes_last_letter() {
        let mut grid = filled("ab", "GY");
        assert!(grid.clear_last_letter());

        assert_eq!(grid.active_id(), 1);
        assert!(grid.cells()[1].is_empty());
        assert_eq!(grid.cells()[1].status(), Status::Unknown);
        assert_eq!(grid.cells()[0].status(), Status::Actual);
    }

    #[test]
    fn clear_on_empty_is_noop() {
        let mut grid = Grid::new();
        assert!(!grid.clear_last_letter());
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn cycle_walks_status_machine() {
        let mut grid = filled("a", "");
        assert_eq!(grid.cycle_status(0).unwrap(), Status::Actual);
        assert_eq!(grid.cycle_status(0).unwrap(), Status::Include);
        assert_eq!(grid.cycle_status(0).unwrap(), Status::Exclude);
    }

    #[test]
    fn cycle_on_empty_cell_stays_unknown() {
        let mut grid = filled("a", "");
        assert_eq!(grid.cycle_status(3).unwrap(), Status::Unknown);
        assert!(grid.cells()[3].is_empty());
    }

    #[test]
    fn cycle_out_of_range() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.cycle_status(30),
            Err(GridError::CellOutOfRange { index: 30, len: 30 })
        );
    }

    #[test]
    fn push_row_sets_statuses() {
        let grid = filled("SLATE", "GY-🟩🟨");
        let statuses: Vec<Status> = grid.row(0).unwrap().iter().map(Cell::status).collect();
        assert_eq!(
            statuses,
            vec![
                Status::Actual,
                Status::Include,
                Status::Exclude,
                Status::Actual,
                Status::Include
            ]
        );
        assert_eq!(grid.rows_filled(), 1);
    }

    #[test]
    fn push_row_partial_word() {
        let grid = filled("sla", "");
        assert_eq!(grid.active_id(), 3);
        assert_eq!(grid.rows_filled(), 0);
    }

    #[test]
    fn push_row_errors_leave_grid_untouched() {
        let mut grid = Grid::new();
        assert!(matches!(
            grid.push_row("crane", "GY"),
            Err(GridError::FeedbackLength {
                letters: 5,
                feedback: 2
            })
        ));
        assert!(matches!(
            grid.push_row("crane", "GYXG-"),
            Err(GridError::InvalidFeedback(_))
        ));
        assert!(matches!(
            grid.push_row("cr4ne", ""),
            Err(GridError::InvalidLetter('4'))
        ));
        assert!(matches!(
            grid.push_row("cranes", ""),
            Err(GridError::RowTooLong { len: 6, max: 5 })
        ));
        assert_eq!(grid.active_id(), 0);
    }

    #[test]
    fn push_row_stops_when_full() {
        let mut grid = Grid::with_dimensions(1, 5);
        grid.push_row("abc", "").unwrap();
        assert_eq!(grid.push_row("defg", "").unwrap(), 2);
        assert!(grid.is_full());
    }

    #[test]
    fn row_out_of_range() {
        let grid = Grid::new();
        assert!(grid.row(5).is_some());
        assert!(grid.row(6).is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut grid = filled("crane", "GGGGG");
        grid.reset();
        assert_eq!(grid, Grid::new());
    }
}
