//! Formatting utilities shared by the TUI and the simple CLI

use crate::game::{GuessOutcome, MAX_WRONG, Session, Stats, Status};

/// Character shown for letters not guessed yet
pub const PLACEHOLDER: char = '_';

/// Gallows drawings, one per wrong-guess count
static GALLOWS: [[&str; 7]; MAX_WRONG + 1] = [
    [
        "  +---+", "  |   |", "      |", "      |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", "      |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", "  |   |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|   |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "      |", "=======",
    ],
    [
        "  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "      |", "=======",
    ],
];

/// Gallows drawing for a wrong-guess count, clamped to the final frame
#[must_use]
pub fn gallows_frame(wrong_guesses: usize) -> &'static [&'static str] {
    &GALLOWS[wrong_guesses.min(MAX_WRONG)]
}

/// Word as shown to the player: letters spaced out, unknown ones as placeholders
///
/// Once the game is over the whole secret word is revealed.
#[must_use]
pub fn word_display(session: &Session) -> String {
    let letters: Vec<String> = if session.is_over() {
        session
            .secret()
            .text()
            .chars()
            .map(String::from)
            .collect()
    } else {
        session
            .masked()
            .into_iter()
            .map(|slot| slot.unwrap_or(PLACEHOLDER).to_string())
            .collect()
    };

    letters.join(" ")
}

/// `Guessed Wrong: n/6`
#[must_use]
pub fn wrong_counter(session: &Session) -> String {
    format!("Guessed Wrong: {}/{MAX_WRONG}", session.wrong_guesses())
}

/// Letters in the order they were guessed, comma separated
#[must_use]
pub fn used_letters(session: &Session) -> String {
    let letters: Vec<String> = session
        .used_letters()
        .iter()
        .map(char::to_string)
        .collect();
    letters.join(", ")
}

/// `Wins: W | Losses: L`
#[must_use]
pub fn stats_summary(stats: Stats) -> String {
    format!("Wins: {} | Losses: {}", stats.wins, stats.losses)
}

/// `Winrate: X.XX%`
#[must_use]
pub fn winrate_summary(stats: Stats) -> String {
    format!("Winrate: {:.2}%", stats.winrate())
}

/// Banner replacing the letter buttons once a game has ended
#[must_use]
pub const fn outcome_banner(status: Status) -> Option<&'static str> {
    match status {
        Status::InProgress => None,
        Status::Won => Some("You Won!"),
        Status::Lost => Some("You Lose!"),
    }
}

/// Feedback line for a guess, `None` for guesses that are silently ignored
#[must_use]
pub fn guess_feedback(outcome: GuessOutcome) -> Option<String> {
    match outcome {
        GuessOutcome::Hit { letter, count: 1 } => Some(format!("Yes! '{letter}' is in the word")),
        GuessOutcome::Hit { letter, count } => {
            Some(format!("Yes! '{letter}' appears {count} times"))
        }
        GuessOutcome::Miss { letter } => Some(format!("No '{letter}' in the word")),
        GuessOutcome::Repeated { .. } | GuessOutcome::GameOver | GuessOutcome::Invalid { .. } => {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, SecretWord};
    use crate::game::Controller;
    use crate::wordlists::testing::ScriptedWords;

    fn controller(word: &str) -> Controller<ScriptedWords> {
        Controller::new(ScriptedWords::new(&[word]), Difficulty::Easy)
    }

    #[test]
    fn gallows_has_a_frame_per_wrong_guess() {
        assert_eq!(gallows_frame(0)[2], "      |");
        assert_eq!(gallows_frame(1)[2], "  O   |");
        assert_eq!(gallows_frame(6)[4], " / \\  |");
        assert_eq!(gallows_frame(99), gallows_frame(MAX_WRONG));
    }

    #[test]
    fn gallows_frames_have_equal_height() {
        for wrong in 0..=MAX_WRONG {
            assert_eq!(gallows_frame(wrong).len(), 7);
        }
    }

    #[test]
    fn word_display_masks_unknown_letters() {
        let mut c = controller("balloon");
        assert_eq!(word_display(c.session()), "_ _ _ _ _ _ _");

        c.submit_guess('l');
        c.submit_guess('o');
        assert_eq!(word_display(c.session()), "_ _ l l o o _");
    }

    #[test]
    fn word_display_reveals_after_loss() {
        let mut c = controller("cat");
        c.submit_guess('c');
        for letter in "qwerxy".chars() {
            c.submit_guess(letter);
        }
        assert!(c.session().is_over());
        assert_eq!(word_display(c.session()), "c a t");
    }

    #[test]
    fn counters_and_used_letters() {
        let mut c = controller("cat");
        for letter in "tqa".chars() {
            c.submit_guess(letter);
        }
        assert_eq!(wrong_counter(c.session()), "Guessed Wrong: 1/6");
        assert_eq!(used_letters(c.session()), "t, q, a");
    }

    #[test]
    fn used_letters_empty_session() {
        let session = Session::new(SecretWord::new("cat").unwrap(), Difficulty::Easy);
        assert_eq!(used_letters(&session), "");
    }

    #[test]
    fn stats_lines() {
        assert_eq!(stats_summary(Stats { wins: 2, losses: 1 }), "Wins: 2 | Losses: 1");
        assert_eq!(winrate_summary(Stats::default()), "Winrate: 0.00%");
        assert_eq!(winrate_summary(Stats { wins: 1, losses: 1 }), "Winrate: 50.00%");
        assert_eq!(winrate_summary(Stats { wins: 3, losses: 0 }), "Winrate: 100.00%");
    }

    #[test]
    fn banners() {
        assert_eq!(outcome_banner(Status::InProgress), None);
        assert_eq!(outcome_banner(Status::Won), Some("You Won!"));
        assert_eq!(outcome_banner(Status::Lost), Some("You Lose!"));
    }

    #[test]
    fn feedback_for_applied_guesses_only() {
        assert_eq!(
            guess_feedback(GuessOutcome::Hit { letter: 'a', count: 1 }).as_deref(),
            Some("Yes! 'a' is in the word")
        );
        assert_eq!(
            guess_feedback(GuessOutcome::Hit { letter: 'l', count: 2 }).as_deref(),
            Some("Yes! 'l' appears 2 times")
        );
        assert_eq!(
            guess_feedback(GuessOutcome::Miss { letter: 'z' }).as_deref(),
            Some("No 'z' in the word")
        );
        assert_eq!(guess_feedback(GuessOutcome::Repeated { letter: 'z' }), None);
        assert_eq!(guess_feedback(GuessOutcome::GameOver), None);
    }
}
