//! Per-cell letter status and its cycling state machine
//!
//! A cell's status classifies its letter against the (unknown) target word:
//! - `Unknown` = the cell holds no letter
//! - `Exclude` = gray, letter not in the word
//! - `Include` = yellow, letter in the word but not here
//! - `Actual` = green, letter at exactly this position
//!
//! Clicking a filled cell walks `Exclude -> Actual -> Include -> Exclude`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Unknown,
    Exclude,
    Include,
    Actual,
}

impl Status {
    /// All statuses in declaration order
    pub const ALL: [Self; 4] = [Self::Unknown, Self::Exclude, Self::Include, Self::Actual];

    /// Transition applied when a filled cell is cycled
    ///
    /// `Unknown` only occurs on a freshly filled cell that never got a status,
    /// so it enters the cycle at `Exclude`.
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Status;
    ///
    /// assert_eq!(Status::Exclude.next(), Status::Actual);
    /// assert_eq!(Status::Actual.next(), Status::Include);
    /// assert_eq!(Status::Include.next(), Status::Exclude);
    /// ```
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Unknown | Self::Include => Self::Exclude,
            Self::Exclude => Self::Actual,
            Self::Actual => Self::Include,
        }
    }

    /// Number of `next()` steps needed to go from `Exclude` to `self`
    ///
    /// Returns `None` for `Unknown`, which is not reachable from a filled cell.
    #[inline]
    #[must_use]
    pub const fn steps_from_exclude(self) -> Option<usize> {
        match self {
            Self::Unknown => None,
            Self::Exclude => Some(0),
            Self::Actual => Some(1),
            Self::Include => Some(2),
        }
    }

    /// Whether the letter is known to be in the word (green or yellow)
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Actual | Self::Include)
    }

    /// Parse one feedback character
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for actual
    /// - 'Y'/'y'/🟨 for include
    /// - '-'/'_'/'.'/⬜/⬛ for exclude
    #[must_use]
    pub const fn from_feedback_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Actual),
            'Y' | 'y' | '🟨' => Some(Self::Include),
            '-' | '_' | '.' | '⬜' | '⬛' => Some(Self::Exclude),
            _ => None,
        }
    }

    /// Parse a whole feedback string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// # Examples
    /// ```
    /// use wordle_hints::core::Status;
    ///
    /// let statuses = Status::parse_feedback("gY-").unwrap();
    /// assert_eq!(statuses, vec![Status::Actual, Status::Include, Status::Exclude]);
    /// assert!(Status::parse_feedback("GX").is_none());
    /// ```
    #[must_use]
    pub fn parse_feedback(s: &str) -> Option<Vec<Self>> {
        s.chars().map(Self::from_feedback_char).collect()
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Unknown => '⬛',
            Self::Exclude => '⬜',
            Self::Include => '🟨',
            Self::Actual => '🟩',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Exclude => "exclude",
            Self::Include => "include",
            Self::Actual => "actual",
        };
        f.write_str(name)
    }
}
