//! Hangman - CLI
//!
//! Terminal Hangman with a TUI (default) and a plain line-oriented mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    core::{Difficulty, Locale},
    game::Controller,
    interactive::{App, run_tui},
    logging::init_file_logging,
    wordlists::{RandomWords, WordLists, loader::load_from_file},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty group of the first word
    #[arg(short, long, global = true, value_enum, default_value_t = Difficulty::Easy)]
    difficulty: Difficulty,

    /// Custom word list with [easy]/[medium]/[hard] sections (default: built-in lists)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Seed for word selection, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Language of input validation messages
    #[arg(long, global = true, value_enum, default_value_t = Locale::Pl)]
    locale: Locale,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,
}

/// Load word lists based on the -w flag
fn load_wordlists(path: Option<&Path>) -> Result<WordLists> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("cannot read word list {}", path.display())),
        None => Ok(WordLists::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_file_logging(path)?;
    }

    let lists = load_wordlists(cli.wordlist.as_deref())?;
    let source = match cli.seed {
        Some(seed) => RandomWords::with_seed(lists, seed),
        None => RandomWords::new(lists),
    };
    let mut controller = Controller::new(source, cli.difficulty);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_tui(App::new(controller, cli.locale)),
        Commands::Simple => {
            run_simple(&mut controller, cli.locale)?;
            Ok(())
        }
    }
}
