//! Display functions for command results

use super::formatters::{cell_tile, create_progress_bar, format_positions, row_to_emoji};
use crate::client::{CorpusChoice, WordHint};
use crate::core::Grid;
use crate::query::HintQuery;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Print the grid, one row of tiles per line, empty rows after the cursor collapsed
pub fn print_grid(grid: &Grid) {
    println!();
    let last_row = (grid.active_id() / grid.letters()).min(grid.tries() - 1);
    for row in 0..=last_row {
        let Some(cells) = grid.row(row) else {
            break;
        };
        let tiles: Vec<String> = cells.iter().map(|c| cell_tile(c).to_string()).collect();
        println!(
            "  {} {}  {}",
            format!("{}.", row + 1).bright_black(),
            tiles.join(" "),
            row_to_emoji(cells)
        );
    }
    println!(
        "  {}",
        format!("{}/{} letters", grid.active_id(), grid.cells().len()).bright_black()
    );
}

/// Print derived constraints and any errors
pub fn print_query(query: &HintQuery) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {}", "CONSTRAINTS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    if query.constraints.is_empty() {
        println!("   (none)");
    } else {
        println!(
            "   {:<6} {:<10} {:<14} {:>7} {:>7}",
            "Letter", "At", "Not at", "Min", "Max"
        );
        for c in &query.constraints {
            let letter = if c.is_ill_defined() {
                c.letter.to_string().red().bold()
            } else if c.is_absent() {
                c.letter.to_string().bright_black()
            } else {
                c.letter.to_string().bright_yellow().bold()
            };
            println!(
                "   {:<6} {:<10} {:<14} {:>7} {:>7}",
                letter,
                format_positions(&c.positions),
                format_positions(&c.exclude_positions),
                c.at_least,
                c.at_most
            );
        }
    }

    print_errors(&query.error_messages());
}

/// Print error messages in red, nothing when the list is empty
pub fn print_errors(errors: &[String]) {
    for error in errors {
        println!("{}", format!("❌ {error}").red());
    }
}

/// Print the constraints as the JSON array the hint service receives
///
/// # Errors
/// Returns an error if serialization fails.
pub fn print_query_json(query: &HintQuery) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(&query.constraints)?);
    Ok(())
}

/// Print ranked hints with a frequency bar
pub fn print_hints(hints: &[WordHint], corpus: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "HINTS FROM".bright_cyan().bold(),
        corpus.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if hints.is_empty() {
        println!("\n{}", "No words match these constraints.".yellow());
        return;
    }

    #[allow(clippy::cast_precision_loss)]
    let max_frequency = hints.iter().map(|h| h.frequency).max().unwrap_or(0) as f64;

    println!("\n📊 {} candidates:", hints.len());
    for (i, hint) in hints.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let bar = create_progress_bar(hint.frequency as f64, max_frequency, 20);
        println!(
            "   {:>3}. {}  [{}] freq {:<9} partition {}",
            (i + 1).to_string().bright_black(),
            hint.word.to_uppercase().bright_white().bold(),
            bar.green(),
            hint.frequency,
            hint.partition
        );
    }
}

/// Print the corpus list, marking the selected one
pub fn print_corpora(choice: &CorpusChoice) {
    println!("\n{}", "Available corpora:".bright_cyan().bold());
    for name in &choice.options {
        if *name == choice.selected {
            println!("  • {} {}", name.bright_green().bold(), "(selected)".bright_black());
        } else {
            println!("  • {name}");
        }
    }
}

/// Run `f` while a spinner with `message` is shown on stderr
pub fn with_spinner<T>(message: &str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = f();
    spinner.finish_and_clear();
    result
}
