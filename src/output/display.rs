//! Display functions for the simple CLI mode

use super::formatters::{
    gallows_frame, outcome_banner, stats_summary, used_letters, winrate_summary, word_display,
    wrong_counter,
};
use crate::game::{ALPHABET, LetterState, Session, Stats, Status};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// Print the whole game surface: title, gallows, word, letters and stats
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_session<W: Write>(out: &mut W, session: &Session, stats: Stats) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        " {}",
        format!("Hangman {}", session.difficulty())
            .bright_cyan()
            .bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for line in gallows_frame(session.wrong_guesses()) {
        writeln!(out, "   {line}")?;
    }
    writeln!(out, "   {}", wrong_counter(session))?;

    writeln!(
        out,
        "\n   {}\n",
        word_display(session).bright_yellow().bold()
    )?;

    match outcome_banner(session.status()) {
        Some(banner) => {
            let banner = if session.status() == Status::Won {
                banner.green().bold()
            } else {
                banner.red().bold()
            };
            writeln!(out, "   {banner}")?;
        }
        None => {
            let letters: Vec<String> = ALPHABET
                .iter()
                .map(|&letter| letter_button(session, letter).to_string())
                .collect();
            writeln!(out, "   {}", letters.join(" "))?;
        }
    }

    writeln!(out, "\n   Used Letters: {}", used_letters(session))?;
    writeln!(
        out,
        "   {}  {}",
        stats_summary(stats),
        winrate_summary(stats).bright_white()
    )?;

    Ok(())
}

fn letter_button(session: &Session, letter: char) -> ColoredString {
    let text = letter.to_string();
    match session.letter_state(letter) {
        LetterState::Available => text.bright_white().bold(),
        LetterState::Hit => text.green(),
        LetterState::Miss => text.red().strikethrough(),
        LetterState::Locked => text.bright_black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, SecretWord};

    fn render(session: &Session, stats: Stats) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_session(&mut out, session, stats).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_fresh_session() {
        let session = Session::new(SecretWord::new("cat").unwrap(), Difficulty::Medium);
        let text = render(&session, Stats::default());

        assert!(text.contains("Hangman medium"));
        assert!(text.contains("_ _ _"));
        assert!(text.contains("Guessed Wrong: 0/6"));
        assert!(text.contains("a b c d e f g h i j k l m n o p q r s t u v w x y z"));
        assert!(text.contains("Wins: 0 | Losses: 0"));
        assert!(text.contains("Winrate: 0.00%"));
    }
}
