//! Core domain types for Hangman
//!
//! Pure value types with no knowledge of game flow or rendering:
//! the secret word, difficulty groups and guess validation.

mod difficulty;
mod validation;
mod word;

pub use difficulty::Difficulty;
pub use validation::{Locale, ValidationError, validate_guess};
pub use word::{SecretWord, WordError};
