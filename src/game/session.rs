//! Per-word game session
//!
//! A session holds everything that belongs to one secret word: the letters tried so far,
//! the wrong-guess counter and whether the game has ended. Ending the game is left to the
//! controller, which owns the stats that must be updated at the same moment.

use crate::core::{Difficulty, SecretWord};
use rustc_hash::FxHashSet;

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG: usize = 6;

/// Letters offered as guess affordances
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Effect of a single guess on the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word `count` times
    Hit { letter: char, count: usize },
    /// The letter is not in the word
    Miss { letter: char },
    /// The letter had already been tried; nothing changed
    Repeated { letter: char },
    /// The game has ended; nothing changed
    GameOver,
    /// Not a letter of the alphabet; nothing changed
    Invalid { letter: char },
}

impl GuessOutcome {
    /// True when the guess mutated the session
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Hit { .. } | Self::Miss { .. })
    }
}

/// How a letter affordance should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    /// Can still be guessed
    Available,
    /// Guessed and present in the word
    Hit,
    /// Guessed and absent from the word
    Miss,
    /// Never guessed, but the game is over
    Locked,
}

/// State of one game of Hangman
#[derive(Debug, Clone)]
pub struct Session {
    secret: SecretWord,
    difficulty: Difficulty,
    guessed: FxHashSet<char>,
    used: Vec<char>,
    wrong_guesses: usize,
    over: bool,
}

impl Session {
    #[must_use]
    pub fn new(secret: SecretWord, difficulty: Difficulty) -> Self {
        Self {
            secret,
            difficulty,
            guessed: FxHashSet::default(),
            used: Vec::new(),
            wrong_guesses: 0,
            over: false,
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.over
    }

    /// Set of letters guessed so far
    #[must_use]
    pub const fn guessed(&self) -> &FxHashSet<char> {
        &self.guessed
    }

    /// Letters guessed so far, in the order they were tried
    #[must_use]
    pub fn used_letters(&self) -> &[char] {
        &self.used
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Every letter of the secret word has been guessed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.secret.is_revealed_by(&self.guessed)
    }

    /// The wrong-guess budget is used up
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.wrong_guesses >= MAX_WRONG
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if !self.over {
            Status::InProgress
        } else if self.is_solved() {
            Status::Won
        } else {
            Status::Lost
        }
    }

    /// Secret word with unguessed positions as `None`
    #[must_use]
    pub fn masked(&self) -> Vec<Option<char>> {
        self.secret.mask(&self.guessed)
    }

    /// Presentation state of one alphabet letter
    #[must_use]
    pub fn letter_state(&self, letter: char) -> LetterState {
        if self.has_guessed(letter) {
            if self.secret.has_letter(letter) {
                LetterState::Hit
            } else {
                LetterState::Miss
            }
        } else if self.over {
            LetterState::Locked
        } else {
            LetterState::Available
        }
    }

    /// Record a guess
    ///
    /// Uppercase ASCII letters are folded to lowercase. Guesses after the game ended,
    /// repeated letters and anything outside `a..=z` leave the session untouched.
    /// Win/loss detection is not performed here.
    pub(super) fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        if self.over {
            return GuessOutcome::GameOver;
        }

        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return GuessOutcome::Invalid { letter };
        }

        if !self.guessed.insert(letter) {
            return GuessOutcome::Repeated { letter };
        }
        self.used.push(letter);

        match self.secret.occurrences(letter) {
            0 => {
                self.wrong_guesses += 1;
                GuessOutcome::Miss { letter }
            }
            count => GuessOutcome::Hit { letter, count },
        }
    }

    /// Mark the session as finished
    pub(super) fn finish(&mut self) {
        self.over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(word: &str) -> Session {
        Session::new(SecretWord::new(word).unwrap(), Difficulty::Easy)
    }

    #[test]
    fn alphabet_is_a_to_z() {
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(ALPHABET.first(), Some(&'a'));
        assert_eq!(ALPHABET.last(), Some(&'z'));
    }

    #[test]
    fn new_session_is_fresh() {
        let s = session("cat");
        assert_eq!(s.wrong_guesses(), 0);
        assert!(s.guessed().is_empty());
        assert!(!s.is_over());
        assert_eq!(s.status(), Status::InProgress);
        assert_eq!(s.masked(), vec![None, None, None]);
    }

    #[test]
    fn hit_reports_occurrences() {
        let mut s = session("balloon");
        assert_eq!(
            s.apply_guess('l'),
            GuessOutcome::Hit {
                letter: 'l',
                count: 2
            }
        );
        assert_eq!(s.wrong_guesses(), 0);
    }

    #[test]
    fn miss_counts_wrong_guess() {
        let mut s = session("cat");
        assert_eq!(s.apply_guess('z'), GuessOutcome::Miss { letter: 'z' });
        assert_eq!(s.wrong_guesses(), 1);
    }

    #[test]
    fn uppercase_guess_is_folded() {
        let mut s = session("cat");
        assert!(s.apply_guess('C').is_applied());
        assert!(s.has_guessed('c'));
    }

    #[test]
    fn repeated_guess_is_ignored() {
        let mut s = session("cat");
        s.apply_guess('z');
        assert_eq!(s.apply_guess('z'), GuessOutcome::Repeated { letter: 'z' });
        assert_eq!(s.wrong_guesses(), 1);
        assert_eq!(s.used_letters(), &['z']);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut s = session("cat");
        assert_eq!(s.apply_guess('7'), GuessOutcome::Invalid { letter: '7' });
        assert_eq!(s.apply_guess('ą'), GuessOutcome::Invalid { letter: 'ą' });
        assert!(s.guessed().is_empty());
        assert_eq!(s.wrong_guesses(), 0);
    }

    #[test]
    fn wrong_guesses_match_absent_letters() {
        let mut s = session("banana");
        for letter in ['q', 'a', 'x', 'n', 'e', 'a', 'x', 'b'] {
            s.apply_guess(letter);
            let absent = s
                .guessed()
                .iter()
                .filter(|&&l| !s.secret().has_letter(l))
                .count();
            assert_eq!(s.wrong_guesses(), absent);
        }
        assert_eq!(s.wrong_guesses(), 3);
    }

    #[test]
    fn used_letters_keep_guess_order() {
        let mut s = session("cat");
        for letter in ['t', 'q', 'a', 'q'] {
            s.apply_guess(letter);
        }
        assert_eq!(s.used_letters(), &['t', 'q', 'a']);
    }

    #[test]
    fn solved_and_exhausted_are_derived() {
        let mut s = session("cat");
        for letter in ['c', 'a'] {
            s.apply_guess(letter);
        }
        assert!(!s.is_solved());
        s.apply_guess('t');
        assert!(s.is_solved());
        assert!(!s.is_exhausted());

        let mut s = session("cat");
        for letter in ['q', 'w', 'e', 'r', 'u'] {
            s.apply_guess(letter);
        }
        assert!(!s.is_exhausted());
        s.apply_guess('y');
        assert!(s.is_exhausted());
    }

    #[test]
    fn finished_session_rejects_guesses() {
        let mut s = session("cat");
        s.apply_guess('c');
        s.finish();
        assert_eq!(s.apply_guess('a'), GuessOutcome::GameOver);
        assert!(!s.has_guessed('a'));
        assert_eq!(s.status(), Status::Lost);
    }

    #[test]
    fn letter_states() {
        let mut s = session("cat");
        s.apply_guess('c');
        s.apply_guess('z');
        assert_eq!(s.letter_state('c'), LetterState::Hit);
        assert_eq!(s.letter_state('z'), LetterState::Miss);
        assert_eq!(s.letter_state('a'), LetterState::Available);

        s.finish();
        assert_eq!(s.letter_state('a'), LetterState::Locked);
        assert_eq!(s.letter_state('c'), LetterState::Hit);
    }
}
