//! Simple interactive CLI mode
//!
//! Line-based grid editor: type letters, mark them, and ask for hints.

use crate::client::{ClientError, HintService, WordHint, request_hints};
use crate::core::{Grid, GridError, Status};
use crate::output::{print_errors, print_grid, print_hints, print_query, with_spinner};
use crate::query::{HintQuery, derive};
use colored::Colorize;
use std::io::{self, Write};
use std::num::NonZeroU32;

/// One parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append these letters
    Type(String),
    /// Append a word and mark it with feedback
    TypeRow { word: String, feedback: String },
    /// Remove the last letter
    Back,
    /// Cycle the status of a cell (0-based linear index)
    Toggle(usize),
    Query,
    Hints,
    Corpus(String),
    Limit(Option<NonZeroU32>),
    New,
    Help,
    Quit,
}

/// Parse one input line
///
/// `letters` is the grid width, needed to turn `t ROW COL` into an index.
///
/// # Errors
///
/// Returns a message describing why the line isn't a command.
pub fn parse_command(input: &str, letters: usize) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty input".to_string());
    };
    let args: Vec<&str> = parts.collect();

    let command = match (head.to_lowercase().as_str(), args.as_slice()) {
        ("quit" | "exit" | ":q", []) => Command::Quit,
        ("help" | "?", []) => Command::Help,
        ("back" | "del" | "-", []) => Command::Back,
        ("new", []) => Command::New,
        ("query", []) => Command::Query,
        ("hints", []) => Command::Hints,
        ("type", [word]) => Command::Type((*word).to_string()),
        ("type", [word, feedback]) => Command::TypeRow {
            word: (*word).to_string(),
            feedback: (*feedback).to_string(),
        },
        ("corpus", [name]) => Command::Corpus((*name).to_string()),
        ("limit", ["none" | "off"]) => Command::Limit(None),
        ("limit", [n]) => {
            let limit = n
                .parse::<NonZeroU32>()
                .map_err(|_| format!("Limit must be a positive number, got '{n}'"))?;
            Command::Limit(Some(limit))
        }
        ("t" | "toggle", [cell]) => Command::Toggle(parse_one_based(cell)?),
        ("t" | "toggle", [row, col]) => {
            let row = parse_one_based(row)?;
            let col = parse_one_based(col)?;
            if col >= letters {
                return Err(format!("Column must be between 1 and {letters}"));
            }
            let index = row
                .checked_mul(letters)
                .and_then(|start| start.checked_add(col))
                .ok_or_else(|| format!("Row {} is out of range", row.saturating_add(1)))?;
            Command::Toggle(index)
        }
        (_, []) if head.chars().all(|c| c.is_ascii_alphabetic()) => {
            Command::Type(head.to_string())
        }
        (_, [feedback]) if head.chars().all(|c| c.is_ascii_alphabetic()) => Command::TypeRow {
            word: head.to_string(),
            feedback: (*feedback).to_string(),
        },
        _ => return Err(format!("Unknown command '{}'. Type 'help'.", input.trim())),
    };
    Ok(command)
}

fn parse_one_based(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected a number starting at 1, got '{s}'")),
    }
}

/// What the loop should show after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Grid,
    Query(HintQuery),
    Hints(Vec<WordHint>),
    Message(String),
    Error(String),
    Help,
    Quit,
}

/// Interactive session state
pub struct Session<'a, S: HintService + ?Sized> {
    service: &'a S,
    pub grid: Grid,
    pub corpus: String,
    pub limit: Option<NonZeroU32>,
}

impl<'a, S: HintService + ?Sized> Session<'a, S> {
    #[must_use]
    pub fn new(service: &'a S, corpus: String, limit: Option<NonZeroU32>) -> Self {
        Self {
            service,
            grid: Grid::new(),
            corpus,
            limit,
        }
    }

    /// Apply a command to the session
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Type(letters) => self.type_letters(&letters),
            Command::TypeRow { word, feedback } => match self.grid.push_row(&word, &feedback) {
                Ok(_) => Reply::Grid,
                Err(e) => Reply::Error(e.to_string()),
            },
            Command::Back => {
                if self.grid.clear_last_letter() {
                    Reply::Grid
                } else {
                    Reply::Error("Nothing to delete!".to_string())
                }
            }
            Command::Toggle(index) => self.toggle(index),
            Command::Query => Reply::Query(derive(&self.grid)),
            Command::Hints => self.hints(),
            Command::Corpus(name) => {
                self.corpus = name;
                Reply::Message(format!("Corpus set to {}", self.corpus))
            }
            Command::Limit(limit) => {
                self.limit = limit;
                Reply::Message(limit.map_or_else(
                    || "Limit cleared".to_string(),
                    |l| format!("Limit set to {l}"),
                ))
            }
            Command::New => {
                self.grid.reset();
                Reply::Grid
            }
            Command::Help => Reply::Help,
            Command::Quit => Reply::Quit,
        }
    }

    /// Types all of `letters` or none of them
    fn type_letters(&mut self, letters: &str) -> Reply {
        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Reply::Error(GridError::InvalidLetter(bad).to_string());
        }
        let room = self.grid.cells().len() - self.grid.active_id();
        if room == 0 {
            return Reply::Error("The grid is full!".to_string());
        }
        let count = letters.chars().count();
        if count > room {
            return Reply::Error(format!("Only {room} cells left, can't type {count} letters"));
        }

        for letter in letters.chars() {
            if let Err(e) = self.grid.append_letter(letter) {
                return Reply::Error(e.to_string());
            }
        }
        Reply::Grid
    }

    fn toggle(&mut self, index: usize) -> Reply {
        match self.grid.cycle_status(index) {
            Ok(Status::Unknown) => Reply::Error(format!("Cell {} is empty", index + 1)),
            Ok(_) => Reply::Grid,
            Err(e) => Reply::Error(e.to_string()),
        }
    }

    fn hints(&mut self) -> Reply {
        let query = derive(&self.grid);
        match request_hints(self.service, query, &self.corpus, self.limit) {
            Ok(hints) => Reply::Hints(hints),
            Err(ClientError::RejectedQuery(errors)) => Reply::Error(
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Err(e) => Reply::Error(e.to_string()),
        }
    }
}

fn print_help() {
    println!("\nCommands:");
    println!("  crane          type letters (each starts gray)");
    println!("  crane -YG--    type a word and mark it: G/🟩 green, Y/🟨 yellow, -/⬜ gray");
    println!("  t N | t R C    cycle cell N (1-30) or row R column C: gray → green → yellow");
    println!("  type WORD [FB] type a word that clashes with a command name");
    println!("  back           delete the last letter");
    println!("  query          show the constraints sent to the hint server");
    println!("  hints          fetch matching words");
    println!("  corpus NAME    choose the word list");
    println!("  limit N|none   cap the number of hints");
    println!("  new            clear the grid");
    println!("  quit           exit\n");
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: HintService + ?Sized>(
    service: &S,
    corpus: String,
    limit: Option<NonZeroU32>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Hints - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    print_help();

    let mut session = Session::new(service, corpus, limit);

    loop {
        let Some(input) = get_user_input("Command")? else {
            println!("\n👋 Bye!\n");
            return Ok(());
        };
        if input.is_empty() {
            continue;
        }

        let command = match parse_command(&input, session.grid.letters()) {
            Ok(command) => command,
            Err(message) => {
                print_errors(&[message]);
                continue;
            }
        };

        let reply = if command == Command::Hints {
            with_spinner("Fetching hints...", || session.execute(command))
        } else {
            session.execute(command)
        };

        match reply {
            Reply::Grid => print_grid(&session.grid),
            Reply::Query(query) => print_query(&query),
            Reply::Hints(hints) => print_hints(&hints, &session.corpus),
            Reply::Message(message) => println!("{}", format!("✓ {message}").green()),
            Reply::Error(message) => {
                print_errors(&message.lines().map(str::to_string).collect::<Vec<_>>());
            }
            Reply::Help => print_help(),
            Reply::Quit => {
                println!("\n👋 Bye!\n");
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt, `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
