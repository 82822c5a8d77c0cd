//! Grid to constraint aggregation
//!
//! Each complete row is one guess. Within a row, a letter marked green or
//! yellow `n` times occurs at least `n` times in the target; if the same
//! letter is also marked gray in that row, it occurs exactly `n` times. A
//! letter that is only gray does not occur at all. Rows are folded together
//! by keeping the tightest bounds seen.

use super::{HintQuery, QueryError};
use crate::core::{Cell, Grid, LetterConstraint, Status};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Green/yellow and gray counts of one letter within one row
#[derive(Debug, Default, Clone, Copy)]
struct RowTally {
    present: usize,
    absent: usize,
}

impl RowTally {
    /// Row-local `(at_least, at_most)` for a word of `letters` letters
    const fn bounds(self, letters: usize) -> (usize, usize) {
        let at_most = match (self.present, self.absent) {
            (0, _) => 0,
            (_, 0) => letters,
            (present, _) => present,
        };
        (self.present, at_most)
    }
}

fn tally_row(cells: &[Cell]) -> FxHashMap<char, RowTally> {
    let mut tallies: FxHashMap<char, RowTally> = FxHashMap::default();
    for cell in cells {
        let Some(letter) = cell.value() else {
            continue;
        };
        let tally = tallies.entry(letter).or_default();
        match cell.status() {
            Status::Actual | Status::Include => tally.present += 1,
            Status::Exclude => tally.absent += 1,
            Status::Unknown => {}
        }
    }
    tallies
}

/// Derive the hint query for the current grid
///
/// Validation runs first: an empty grid or a partially typed row yields a
/// single error and no constraints. Otherwise every complete row is folded
/// into one constraint per letter, in first-seen order, and any letter whose
/// minimum exceeds its maximum is reported as ill-defined.
///
/// # Examples
/// ```
/// use wordle_hints::core::Grid;
/// use wordle_hints::query::derive;
///
/// let mut grid = Grid::new();
/// grid.push_row("SPEED", "G-Y--").unwrap();
///
/// let query = derive(&grid);
/// assert!(query.is_submittable());
///
/// let e = query.constraint_for('E').unwrap();
/// assert_eq!((e.at_least, e.at_most), (1, 1));
/// assert!(e.exclude_positions.contains(&3));
/// ```
#[must_use]
pub fn derive(grid: &Grid) -> HintQuery {
    let letters = grid.letters();
    let active_id = grid.active_id();

    if active_id == 0 {
        return HintQuery::rejected(QueryError::NoLetters);
    }
    let remainder = active_id % letters;
    if remainder != 0 {
        return HintQuery::rejected(QueryError::IncompleteWord {
            missing: letters - remainder,
        });
    }

    let mut constraints: Vec<LetterConstraint> = Vec::new();
    let mut slots: FxHashMap<char, usize> = FxHashMap::default();

    for row in 0..grid.rows_filled() {
        let Some(cells) = grid.row(row) else {
            break;
        };
        let tallies = tally_row(cells);

        for (col, cell) in cells.iter().enumerate() {
            let Some(letter) = cell.value() else {
                continue;
            };
            let Some(tally) = tallies.get(&letter) else {
                continue;
            };
            let (at_least, at_most) = tally.bounds(letters);

            let slot = *slots.entry(letter).or_insert_with(|| {
                constraints.push(LetterConstraint::new(letter, at_least, at_most));
                constraints.len() - 1
            });
            let constraint = &mut constraints[slot];
            constraint.tighten(at_least, at_most);

            match cell.status() {
                Status::Actual => {
                    constraint.positions.insert(col + 1);
                }
                Status::Include => {
                    constraint.exclude_positions.insert(col + 1);
                }
                Status::Exclude | Status::Unknown => {}
            }
        }
    }

    let errors: Vec<QueryError> = constraints
        .iter()
        .filter(|c| c.is_ill_defined())
        .map(|c| QueryError::IllDefined(c.letter))
        .collect();

    debug!(
        rows = grid.rows_filled(),
        constraints = constraints.len(),
        errors = errors.len(),
        "derived hint query"
    );

    HintQuery {
        constraints,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn grid_of(rows: &[(&str, &str)]) -> Grid {
        let mut grid = Grid::new();
        for (word, feedback) in rows {
            grid.push_row(word, feedback).unwrap();
        }
        grid
    }

    fn set(items: &[usize]) -> BTreeSet<usize> {
        items.iter().copied().collect()
    }

    fn bounds(query: &HintQuery, letter: char) -> (usize, usize) {
        let c = query.constraint_for(letter).unwrap();
        (c.at_least, c.at_most)
    }

    #[test]
    fn empty_grid_reports_no_letters() {
        let query = derive(&Grid::new());
        assert_eq!(query.errors, vec![QueryError::NoLetters]);
        assert!(query.constraints.is_empty());
    }

    #[test]
    fn partial_row_reports_missing_letters() {
        let query = derive(&grid_of(&[("abc", "")]));
        assert_eq!(
            query.error_messages(),
            vec!["Need 2 more letters to complete the word".to_string()]
        );
        assert!(query.constraints.is_empty());
    }

    #[test]
    fn partial_second_row_reports_missing_letters() {
        let query = derive(&grid_of(&[("crane", "-----"), ("slat", "")]));
        assert_eq!(query.errors, vec![QueryError::IncompleteWord { missing: 1 }]);
        assert!(query.constraints.is_empty());
    }

    #[test]
    fn every_partial_length_reports_remainder() {
        for typed in 1..5 {
            let mut grid = Grid::new();
            for _ in 0..typed {
                grid.append_letter('a').unwrap();
            }
            let query = derive(&grid);
            assert_eq!(
                query.errors,
                vec![QueryError::IncompleteWord {
                    missing: 5 - typed
                }]
            );
        }
    }

    #[test]
    fn all_green_row() {
        let query = derive(&grid_of(&[("ABCDE", "GGGGG")]));

        assert!(query.errors.is_empty());
        assert_eq!(query.constraints.len(), 5);
        for (i, letter) in ['A', 'B', 'C', 'D', 'E'].into_iter().enumerate() {
            let c = query.constraint_for(letter).unwrap();
            assert_eq!(c.positions, set(&[i + 1]));
            assert!(c.exclude_positions.is_empty());
            assert_eq!((c.at_least, c.at_most), (1, 5));
        }
    }

    #[test]
    fn yellow_and_gray_duplicate_caps_count() {
        // One yellow S and two gray S
        let query = derive(&grid_of(&[("SASSY", "Y----")]));
        assert_eq!(bounds(&query, 'S'), (1, 1));
    }

    #[test]
    fn include_and_exclude_pair() {
        let query = derive(&grid_of(&[("ASSET", "-Y---")]));
        assert_eq!(bounds(&query, 'S'), (1, 1));
        let s = query.constraint_for('S').unwrap();
        assert_eq!(s.exclude_positions, set(&[2]));
        assert!(s.positions.is_empty());
    }

    #[test]
    fn double_include_is_open_ended() {
        let query = derive(&grid_of(&[("ASSET", "-YY--")]));
        assert_eq!(bounds(&query, 'S'), (2, 5));
        assert_eq!(query.constraint_for('S').unwrap().exclude_positions, set(&[2, 3]));
    }

    #[test]
    fn gray_only_letter_is_forbidden() {
        let query = derive(&grid_of(&[("CRANE", "--G--")]));
        for letter in ['C', 'R', 'N', 'E'] {
            assert_eq!(bounds(&query, letter), (0, 0));
            assert!(query.constraint_for(letter).unwrap().is_absent());
        }
        assert_eq!(bounds(&query, 'A'), (1, 5));
    }

    #[test]
    fn rows_fold_to_tightest_bounds() {
        // Both rows show two marked E and one gray E
        let query = derive(&grid_of(&[("EERIE", "YY---"), ("GEESE", "-GG--")]));
        assert_eq!(bounds(&query, 'E'), (2, 2));
        let e = query.constraint_for('E').unwrap();
        assert_eq!(e.positions, set(&[2, 3]));
        assert_eq!(e.exclude_positions, set(&[1, 2]));
        assert!(query.errors.is_empty());
    }

    #[test]
    fn later_row_raises_minimum() {
        let query = derive(&grid_of(&[("SLATE", "Y----"), ("BOSSY", "--YY-")]));
        assert_eq!(bounds(&query, 'S'), (2, 5));
        assert_eq!(query.constraint_for('S').unwrap().exclude_positions, set(&[1, 3, 4]));
    }

    #[test]
    fn contradiction_is_reported_but_constraint_kept() {
        let query = derive(&grid_of(&[("SLATE", "G----"), ("MOSSY", "--__-")]));
        assert_eq!(bounds(&query, 'S'), (1, 0));
        assert!(query.errors.contains(&QueryError::IllDefined('S')));
        assert!(query.error_messages().contains(&"Letter S is ill-defined".to_string()));
        assert!(!query.is_submittable());
    }

    #[test]
    fn output_follows_first_seen_order() {
        let query = derive(&grid_of(&[("CRANE", "-----"), ("TOAST", "-----")]));
        let order: String = query.constraints.iter().map(|c| c.letter).collect();
        assert_eq!(order, "CRANETOS");
    }

    #[test]
    fn derive_is_idempotent() {
        let grid = grid_of(&[("CRANE", "-YG--"), ("TRAIL", "GGG--")]);
        assert_eq!(derive(&grid), derive(&grid));
    }

    #[test]
    fn empty_cells_never_contribute() {
        let grid = grid_of(&[("CRANE", "GGGGG")]);
        let query = derive(&grid);
        let total_letters: usize = query
            .constraints
            .iter()
            .map(|c| c.positions.len() + c.exclude_positions.len())
            .sum();
        assert_eq!(total_letters, 5);
        assert!(query.constraints.iter().all(|c| c.letter.is_ascii_uppercase()));
    }

    #[test]
    fn custom_width_uses_row_length_as_ceiling() {
        let mut grid = Grid::with_dimensions(2, 4);
        grid.push_row("ABCD", "G---").unwrap();
        let query = derive(&grid);
        assert_eq!(bounds(&query, 'A'), (1, 4));
    }
}
