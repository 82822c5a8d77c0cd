//! Formatting utilities for terminal output

use crate::core::{Cell, Status};
use colored::{ColoredString, Colorize};
use std::collections::BTreeSet;

/// Format a row of cells as emoji squares
#[must_use]
pub fn row_to_emoji(cells: &[Cell]) -> String {
    cells.iter().map(|c| c.status().to_emoji()).collect()
}

/// Render one cell as a colored tile, e.g. `" S "` on green
#[must_use]
pub fn cell_tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.value().unwrap_or('·'));
    match cell.status() {
        Status::Actual => text.black().bold().on_green(),
        Status::Include => text.black().bold().on_yellow(),
        Status::Exclude => text.white().bold().on_bright_black(),
        Status::Unknown => text.bright_black(),
    }
}

/// Comma-separated position list, or `-` when empty
#[must_use]
pub fn format_positions(positions: &BTreeSet<usize>) -> String {
    if positions.is_empty() {
        return "-".to_string();
    }
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    #[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
