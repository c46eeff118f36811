//! Game controller
//!
//! Owns the current session, the running stats and the word source. All front ends drive
//! the game exclusively through this type.

use super::session::{GuessOutcome, Session, Status};
use super::stats::{Stats, StatsAction, reduce};
use crate::core::{Difficulty, ValidationError, validate_guess};
use crate::wordlists::WordSource;
use tracing::{debug, info};

/// Result of submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    /// Set when this guess ended the game
    pub finished: Option<Status>,
}

/// Drives sessions and keeps score across them
pub struct Controller<W> {
    source: W,
    session: Session,
    stats: Stats,
}

impl<W> Controller<W> {
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> Stats {
        self.stats
    }
}

impl<W: WordSource> Controller<W> {
    /// Start the first session for `difficulty`
    #[must_use]
    pub fn new(mut source: W, difficulty: Difficulty) -> Self {
        let session = Session::new(source.random_word(difficulty), difficulty);
        info!(%difficulty, "new session");

        Self {
            source,
            session,
            stats: Stats::default(),
        }
    }

    /// Start over with a fresh word from the default group
    pub fn restart(&mut self) {
        self.restart_with(Difficulty::default());
    }

    /// Start over with a fresh word from `difficulty`
    ///
    /// Any game in progress is dropped without touching the stats.
    pub fn restart_with(&mut self, difficulty: Difficulty) {
        self.session = Session::new(self.source.random_word(difficulty), difficulty);
        info!(%difficulty, "new session");
    }

    /// Switch difficulty group, discarding the current game
    pub fn change_difficulty(&mut self, difficulty: Difficulty) {
        self.restart_with(difficulty);
    }

    /// Guess a single letter
    ///
    /// Repeated letters and guesses after the game ended change nothing.
    /// A guess that completes the word or uses up the last wrong guess ends the game
    /// and updates the stats before returning.
    pub fn submit_guess(&mut self, letter: char) -> GuessReport {
        let outcome = self.session.apply_guess(letter);
        debug!(?outcome, wrong = self.session.wrong_guesses(), "guess");

        let finished = if outcome.is_applied() {
            self.evaluate_outcome()
        } else {
            None
        };

        GuessReport { outcome, finished }
    }

    /// Validate typed input and guess it
    ///
    /// # Errors
    /// Returns the validation error without touching the session when the input is not a
    /// single letter.
    pub fn submit_input(&mut self, input: &str) -> Result<GuessReport, ValidationError> {
        let letter = validate_guess(input)?;
        Ok(self.submit_guess(letter))
    }

    /// End the game if it has been won or lost
    ///
    /// Returns the final status when this call ended the game. Once a session is over
    /// further calls do nothing, so each session is scored at most once.
    pub fn evaluate_outcome(&mut self) -> Option<Status> {
        if self.session.is_over() {
            return None;
        }

        let action = if self.session.is_solved() {
            StatsAction::Win
        } else if self.session.is_exhausted() {
            StatsAction::Loss
        } else {
            return None;
        };

        self.stats = reduce(self.stats, action);
        self.session.finish();

        let status = self.session.status();
        info!(
            ?status,
            word = self.session.secret().text(),
            wins = self.stats.wins,
            losses = self.stats.losses,
            "session finished"
        );
        Some(status)
    }
}
