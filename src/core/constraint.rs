//! Per-letter constraint sent to the hint service

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Everything known about one letter of the target word
///
/// Positions are 1-based columns. Serializes as
/// `{ letter, positions, excludePositions, atLeast, atMost }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterConstraint {
    pub letter: char,
    /// Columns where the letter is known to be
    pub positions: BTreeSet<usize>,
    /// Columns where the letter is known not to be
    pub exclude_positions: BTreeSet<usize>,
    pub at_least: usize,
    pub at_most: usize,
}

impl LetterConstraint {
    /// Constraint with the given bounds and no position information
    #[must_use]
    pub const fn new(letter: char, at_least: usize, at_most: usize) -> Self {
        Self {
            letter,
            positions: BTreeSet::new(),
            exclude_positions: BTreeSet::new(),
            at_least,
            at_most,
        }
    }

    /// Narrow the occurrence bounds with another row's evidence
    #[inline]
    pub fn tighten(&mut self, at_least: usize, at_most: usize) {
        self.at_least = self.at_least.max(at_least);
        self.at_most = self.at_most.min(at_most);
    }

    /// Whether the bounds contradict each other
    #[inline]
    #[must_use]
    pub const fn is_ill_defined(&self) -> bool {
        self.at_least > self.at_most
    }

    /// Whether the letter is forbidden entirely
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        self.at_most == 0
    }
}

impl fmt::Display for LetterConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_absent() && !self.is_ill_defined() {
            return write!(f, "{}: absent", self.letter);
        }

        write!(f, "{}: {}..={}", self.letter, self.at_least, self.at_most)?;
        if !self.positions.is_empty() {
            write!(f, " at {}", join_positions(&self.positions))?;
        }
        if !self.exclude_positions.is_empty() {
            write!(f, " not at {}", join_positions(&self.exclude_positions))?;
        }
        Ok(())
    }
}

fn join_positions(positions: &BTreeSet<usize>) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tighten_takes_max_min() {
        let mut c = LetterConstraint::new('S', 1, 5);
        c.tighten(2, 3);
        assert_eq!((c.at_least, c.at_most), (2, 3));

        c.tighten(0, 5);
        assert_eq!((c.at_least, c.at_most), (2, 3));
    }

    #[test]
    fn ill_defined_when_min_exceeds_max() {
        let mut c = LetterConstraint::new('S', 1, 5);
        assert!(!c.is_ill_defined());
        c.tighten(0, 0);
        assert!(c.is_ill_defined());
    }

    #[test]
    fn serializes_camel_case_sorted_positions() {
        let mut c = LetterConstraint::new('T', 2, 5);
        c.exclude_positions.insert(4);
        c.exclude_positions.insert(3);
        c.positions.insert(1);

        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "letter": "T",
                "positions": [1],
                "excludePositions": [3, 4],
                "atLeast": 2,
                "atMost": 5
            })
        );
    }

    #[test]
    fn display_summarizes() {
        let mut c = LetterConstraint::new('E', 1, 1);
        c.positions.insert(5);
        c.exclude_positions.insert(2);
        assert_eq!(c.to_string(), "E: 1..=1 at 5 not at 2");

        assert_eq!(LetterConstraint::new('Q', 0, 0).to_string(), "Q: absent");
    }
}
