//! Syntactic validation of free-text guesses
//!
//! Rules are checked in a fixed order so each input maps to exactly one error:
//! empty input first, then characters outside `A-Z`/`a-z`, then length.

use clap::ValueEnum;
use std::fmt;

/// Language used for validation messages
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    /// Polish, the default
    #[default]
    Pl,
    /// English
    En,
}

/// Reason a typed guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing was entered
    Required,
    /// More than one letter was entered
    TooLong,
    /// Digits, punctuation or non-ASCII letters were entered
    InvalidCharacters,
}

impl ValidationError {
    /// Inline message for this error in the given locale
    #[must_use]
    pub const fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Required, Locale::Pl) => "To pole jest wymagane",
            (Self::Required, Locale::En) => "This field is required",
            (Self::TooLong, Locale::Pl) => "Wprowadź tylko jedną literę",
            (Self::TooLong, Locale::En) => "Enter only one letter",
            (Self::InvalidCharacters, Locale::Pl) => {
                "Nie można wprowadzać liczb ani znaków specjalnych"
            }
            (Self::InvalidCharacters, Locale::En) => "Cannot enter numbers or special characters",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Locale::default()))
    }
}

impl std::error::Error for ValidationError {}

/// Validate a typed guess and return it as a lowercase letter
///
/// Blank input counts as missing. Any other whitespace counts toward the length.
///
/// # Errors
/// Returns the first rule the input breaks, see [`ValidationError`].
///
/// # Examples
/// ```
/// use hangman::core::{validate_guess, ValidationError};
///
/// assert_eq!(validate_guess("Q"), Ok('q'));
/// assert_eq!(validate_guess(""), Err(ValidationError::Required));
/// assert_eq!(validate_guess("ab"), Err(ValidationError::TooLong));
/// assert_eq!(validate_guess("7"), Err(ValidationError::InvalidCharacters));
/// ```
pub fn validate_guess(input: &str) -> Result<char, ValidationError> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    if !input
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Err(ValidationError::InvalidCharacters);
    }

    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter.to_ascii_lowercase()),
        _ => Err(ValidationError::TooLong),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_is_lowercased() {
        assert_eq!(validate_guess("a"), Ok('a'));
        assert_eq!(validate_guess("Z"), Ok('z'));
    }

    #[test]
    fn padded_letter_is_too_long() {
        assert_eq!(validate_guess(" a"), Err(ValidationError::TooLong));
        assert_eq!(validate_guess("a "), Err(ValidationError::TooLong));
        assert_eq!(validate_guess("  m\n"), Err(ValidationError::TooLong));
    }

    #[test]
    fn empty_input_is_required() {
        assert_eq!(validate_guess(""), Err(ValidationError::Required));
        assert_eq!(validate_guess("   "), Err(ValidationError::Required));
    }

    #[test]
    fn several_letters_are_too_long() {
        assert_eq!(validate_guess("ab"), Err(ValidationError::TooLong));
        assert_eq!(validate_guess("a b"), Err(ValidationError::TooLong));
    }

    #[test]
    fn non_letters_are_rejected_before_length() {
        assert_eq!(validate_guess("1"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_guess("!"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_guess("a1"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_guess("ą"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn messages_per_locale() {
        assert_eq!(
            ValidationError::Required.message(Locale::En),
            "This field is required"
        );
        assert_eq!(
            ValidationError::TooLong.message(Locale::En),
            "Enter only one letter"
        );
        assert_eq!(
            ValidationError::InvalidCharacters.message(Locale::En),
            "Cannot enter numbers or special characters"
        );
        assert_eq!(
            ValidationError::Required.message(Locale::Pl),
            "To pole jest wymagane"
        );
    }

    #[test]
    fn display_uses_default_locale() {
        assert_eq!(
            ValidationError::TooLong.to_string(),
            "Wprowadź tylko jedną literę"
        );
    }
}
