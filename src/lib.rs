//! Hangman
//!
//! A terminal Hangman game: guess the secret word one letter at a time before six wrong
//! guesses complete the gallows. Wins and losses are tallied across games.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::Difficulty;
//! use hangman::game::{Controller, Status};
//! use hangman::wordlists::{RandomWords, WordLists};
//!
//! let source = RandomWords::with_seed(WordLists::embedded(), 7);
//! let mut game = Controller::new(source, Difficulty::Easy);
//!
//! // Guess every letter of the word
//! let word = game.session().secret().text().to_string();
//! for letter in word.chars() {
//!     game.submit_guess(letter);
//! }
//!
//! assert_eq!(game.session().status(), Status::Won);
//! assert_eq!(game.stats().wins, 1);
//! ```

// Core domain types
pub mod core;

// Sessions, controller and stats
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Log file setup
pub mod logging;
