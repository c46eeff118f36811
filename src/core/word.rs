//! Secret word representation
//!
//! A `SecretWord` stores a lowercase alphabetic word along with its set of distinct letters
//! for constant-time membership checks while evaluating guesses.

use rustc_hash::FxHashSet;
use std::fmt;

/// The word the player has to guess
///
/// Always non-empty and made only of lowercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: FxHashSet<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is lowercased.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(SecretWord::new("").is_err());
    /// assert!(SecretWord::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.chars().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of positions holding `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.text.chars().filter(|&c| c == letter).count()
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &FxHashSet<char> {
        &self.letters
    }

    /// True when every distinct letter of the word is in `guessed`
    #[must_use]
    pub fn is_revealed_by(&self, guessed: &FxHashSet<char>) -> bool {
        self.letters.is_subset(guessed)
    }

    /// Mask the word against a set of guessed letters
    ///
    /// Returns one entry per position: `Some(letter)` when guessed, `None` otherwise.
    #[must_use]
    pub fn mask(&self, guessed: &FxHashSet<char>) -> Vec<Option<char>> {
        self.text
            .chars()
            .map(|c| guessed.contains(&c).then_some(c))
            .collect()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
