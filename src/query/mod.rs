//! Constraint query derivation
//!
//! Turns the guess grid into the per-letter constraints the hint service
//! needs, reporting incomplete or contradictory input as data.

mod deriver;

pub use deriver::derive;

use crate::core::LetterConstraint;
use std::fmt;

/// Problem found while deriving a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The grid is empty
    NoLetters,
    /// The last row is partially filled
    IncompleteWord { missing: usize },
    /// A letter's minimum occurrence exceeds its maximum
    IllDefined(char),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLetters => write!(f, "No letters specified"),
            Self::IncompleteWord { missing } => write!(
                f,
                "Need {missing} more {} to complete the word",
                if *missing == 1 { "letter" } else { "letters" }
            ),
            Self::IllDefined(letter) => write!(f, "Letter {letter} is ill-defined"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Result of deriving a query from the grid
///
/// Constraints are kept even when errors exist, but any error blocks
/// submission to the hint service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HintQuery {
    pub constraints: Vec<LetterConstraint>,
    pub errors: Vec<QueryError>,
}

impl HintQuery {
    /// Query carrying a single blocking error and no constraints
    #[must_use]
    pub fn rejected(error: QueryError) -> Self {
        Self {
            constraints: Vec::new(),
            errors: vec![error],
        }
    }

    /// Whether the query may be sent to the hint service
    #[inline]
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.errors.is_empty()
    }

    /// Human-readable error messages
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Look up the constraint for a letter (case-insensitive)
    #[must_use]
    pub fn constraint_for(&self, letter: char) -> Option<&LetterConstraint> {
        let letter = letter.to_ascii_uppercase();
        self.constraints.iter().find(|c| c.letter == letter)
    }

    /// Take the constraints if the query is error-free
    ///
    /// # Errors
    /// Returns the error list when the query is not submittable.
    pub fn into_constraints(self) -> Result<Vec<LetterConstraint>, Vec<QueryError>> {
        if self.errors.is_empty() {
            Ok(self.constraints)
        } else {
            Err(self.errors)
        }
    }
}
