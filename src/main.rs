//! Wordle Hints - CLI
//!
//! Derive letter constraints from Wordle guesses and fetch matching words
//! from a hint server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::num::NonZeroU32;
use std::path::PathBuf;
use tracing::debug;
use wordle_hints::{
    client::{ClientError, HintClient},
    commands::{HintsConfig, fetch_hints, list_corpora, run_query, run_simple},
    config::Config,
    logging,
    output::{
        print_corpora, print_grid, print_hints, print_query, print_query_json,
        with_spinner,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_hints",
    about = "Wordle hint client: turns marked guesses into letter constraints and asks a hint server for matching words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./wordle_hints.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Hint API base URL, e.g. http://localhost:8080/api/hint
    #[arg(short = 's', long, global = true)]
    server: Option<String>,

    /// Corpus to search (default: web2)
    #[arg(short, long, global = true)]
    corpus: Option<String>,

    /// Maximum number of hints to return
    #[arg(short, long, global = true)]
    limit: Option<NonZeroU32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive grid editor (default)
    Simple,

    /// Show the constraints derived from guesses
    Query {
        /// Guesses as WORD or WORD:FEEDBACK, e.g. crane:-YG-- (G green, Y yellow, - gray)
        rows: Vec<String>,

        /// Print the constraints as the JSON sent to the hint server
        #[arg(long)]
        json: bool,
    },

    /// Fetch words matching the guesses
    Hints {
        /// Guesses as WORD or WORD:FEEDBACK, e.g. crane:-YG-- (G green, Y yellow, - gray)
        rows: Vec<String>,
    },

    /// List the corpora offered by the hint server
    Corpus,
}

impl Commands {
    /// Whether the command talks to the hint server and so reads the config
    const fn needs_server(&self) -> bool {
        !matches!(self, Self::Query { .. })
    }
}

/// Apply command-line overrides on top of the loaded config
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::discover(cli.config.as_deref()).context("loading configuration")?;

    if let Some(server) = &cli.server {
        config.server.url.clone_from(server);
    }
    if let Some(corpus) = &cli.corpus {
        config.search.corpus.clone_from(corpus);
    }
    if cli.limit.is_some() {
        config.search.limit = cli.limit;
    }

    config.validate().context("invalid configuration")?;
    debug!(?config, "effective configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Default to Simple mode if no command given
    let simple = Commands::Simple;
    let command = cli.command.as_ref().unwrap_or(&simple);

    let config = if command.needs_server() {
        load_config(&cli)?
    } else {
        Config::default()
    };

    match command {
        Commands::Simple => run_simple_command(&config),
        Commands::Query { rows, json } => run_query_command(rows, *json),
        Commands::Hints { rows } => run_hints_command(rows, &config),
        Commands::Corpus => run_corpus_command(&config),
    }
}

fn run_query_command(rows: &[String], json: bool) -> Result<()> {
    let result = run_query(rows).map_err(|e| anyhow::anyhow!(e))?;

    if json {
        // Keep stdout pure JSON
        for error in result.query.error_messages() {
            eprintln!("❌ {error}");
        }
        print_query_json(&result.query)?;
    } else {
        print_grid(&result.grid);
        print_query(&result.query);
    }
    Ok(())
}

fn run_hints_command(rows: &[String], config: &Config) -> Result<()> {
    let result = run_query(rows).map_err(|e| anyhow::anyhow!(e))?;
    print_grid(&result.grid);

    let client = HintClient::new(&config.server)?;
    let hints_config = HintsConfig {
        corpus: config.search.corpus.clone(),
        limit: config.search.limit,
    };

    let fetched = with_spinner("Fetching hints...", || {
        fetch_hints(&client, &result.grid, &hints_config)
    });

    match fetched {
        Ok(found) => {
            print_hints(&found.hints, &found.corpus);
            Ok(())
        }
        Err(ClientError::RejectedQuery(_)) => {
            print_query(&result.query);
            anyhow::bail!("fix the guesses above before asking for hints")
        }
        Err(e) => Err(e.into()),
    }
}

fn run_corpus_command(config: &Config) -> Result<()> {
    let client = HintClient::new(&config.server)?;
    let choice = with_spinner("Fetching corpora...", || {
        list_corpora(&client, Some(config.search.corpus.as_str()))
    })?;

    print_corpora(&choice);
    Ok(())
}

fn run_simple_command(config: &Config) -> Result<()> {
    let client = HintClient::new(&config.server)?;
    run_simple(&client, config.search.corpus.clone(), config.search.limit)
        .map_err(|e| anyhow::anyhow!(e))
}
