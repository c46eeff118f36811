//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//!
//! Custom files hold one word per line, grouped under `[easy]`, `[medium]` and `[hard]`
//! headers. Words before the first header belong to the easy group, blank lines and
//! lines starting with `#` are ignored.

use super::source::WordLists;
use crate::core::{Difficulty, SecretWord};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load word lists from a file
///
/// Invalid words and words under unknown headers are skipped. Groups that end up
/// without any word use the embedded list.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::core::Difficulty;
/// use hangman::wordlists::loader::load_from_file;
///
/// let lists = load_from_file("animals.txt").unwrap();
/// println!("{} hard words", lists.get(Difficulty::Hard).len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordLists> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!(path = %path.display(), "loading custom word list");
    Ok(parse_word_list(&content))
}

/// Parse the text of a sectioned word list
#[must_use]
pub fn parse_word_list(content: &str) -> WordLists {
    let mut easy = Vec::new();
    let mut medium = Vec::new();
    let mut hard = Vec::new();
    let mut section = Some(Difficulty::Easy);

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            section = Difficulty::from_name(header);
            if section.is_none() {
                warn!(line = number + 1, header, "unknown word list section");
            }
            continue;
        }

        let Some(difficulty) = section else {
            continue;
        };

        match SecretWord::new(trimmed) {
            Ok(word) => match difficulty {
                Difficulty::Easy => easy.push(word),
                Difficulty::Medium => medium.push(word),
                Difficulty::Hard => hard.push(word),
            },
            Err(err) => warn!(line = number + 1, word = trimmed, %err, "skipping word"),
        }
    }

    WordLists::with_fallback(easy, medium, hard)
}

/// Convert embedded string slice to a word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{EASY, HARD, MEDIUM};

    fn texts(lists: &WordLists, difficulty: Difficulty) -> Vec<&str> {
        lists.get(difficulty).iter().map(SecretWord::text).collect()
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["cat", "Zebra", "xylophone"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "zebra");
        assert_eq!(words[2].text(), "xylophone");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "", "r2d2", "ice cream", "dog"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_sections() {
        let lists = parse_word_list(
            "# animals\n\
             cat\n\
             [medium]\n\
             giraffe\n\
             \n\
             penguin\n\
             [HARD]\n\
             axolotl\n",
        );

        assert_eq!(texts(&lists, Difficulty::Easy), vec!["cat"]);
        assert_eq!(texts(&lists, Difficulty::Medium), vec!["giraffe", "penguin"]);
        assert_eq!(texts(&lists, Difficulty::Hard), vec!["axolotl"]);
    }

    #[test]
    fn parse_skips_invalid_words_and_unknown_sections() {
        let lists = parse_word_list(
            "[easy]\n\
             cat\n\
             c4t\n\
             [expert]\n\
             quixotic\n\
             [hard]\n\
             sphinx\n",
        );

        assert_eq!(texts(&lists, Difficulty::Easy), vec!["cat"]);
        assert_eq!(texts(&lists, Difficulty::Hard), vec!["sphinx"]);
    }

    #[test]
    fn parse_falls_back_for_missing_groups() {
        let lists = parse_word_list("[medium]\ngiraffe\n");

        assert_eq!(lists.get(Difficulty::Easy).len(), EASY.len());
        assert_eq!(texts(&lists, Difficulty::Medium), vec!["giraffe"]);
        assert_eq!(lists.get(Difficulty::Hard).len(), HARD.len());
    }

    #[test]
    fn parse_empty_file_is_embedded_lists() {
        let lists = parse_word_list("");
        assert_eq!(lists.get(Difficulty::Medium).len(), MEDIUM.len());
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/a/word/list.txt").is_err());
    }
}
