//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{Difficulty, Locale};
use crate::game::{Controller, GuessOutcome, Status};
use crate::output::formatters::guess_feedback;
use crate::output::print_session;
use crate::wordlists::WordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// A line of input in simple mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Quit,
    NewGame,
    Difficulty(Difficulty),
    Guess(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        ":quit" | ":q" | ":exit" => Command::Quit,
        ":new" | ":n" | ":restart" => Command::NewGame,
        other => other
            .strip_prefix(':')
            .and_then(Difficulty::from_name)
            .map_or(Command::Guess(line), Command::Difficulty),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<W: WordSource>(controller: &mut Controller<W>, locale: Locale) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(controller, locale, &mut stdin.lock(), &mut stdout.lock())
}

/// Game loop over arbitrary input and output streams
///
/// Ends on `:quit`, at end of input, or when the player declines another game. The
/// play-again prompt also takes the game commands.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play<W, R, O>(
    controller: &mut Controller<W>,
    locale: Locale,
    input: &mut R,
    out: &mut O,
) -> io::Result<()>
where
    W: WordSource,
    R: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                   Hangman - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════╝")?;
    writeln!(out, "\nGuess the word one letter at a time. Six misses and you hang!")?;
    writeln!(out, "Commands: ':new' new game, ':easy' ':medium' ':hard' change group, ':quit' exit")?;

    loop {
        print_session(out, controller.session(), controller.stats())?;

        if controller.session().status() != Status::InProgress {
            writeln!(
                out,
                "\n   The word was {}",
                controller.session().secret().text().bright_yellow().bold()
            )?;

            let Some(answer) = get_user_input(input, out, "Play again? (yes/no)")? else {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            };

            match parse_command(&answer) {
                Command::NewGame => controller.restart(),
                Command::Difficulty(difficulty) => {
                    controller.change_difficulty(difficulty);
                    writeln!(out, "\n🔄 New {difficulty} game started!")?;
                }
                Command::Guess(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                    controller.restart();
                }
                Command::Quit | Command::Guess(_) => {
                    writeln!(out, "\n👋 Thanks for playing!\n")?;
                    return Ok(());
                }
            }
            continue;
        }

        let Some(line) = get_user_input(input, out, "Guess a letter")? else {
            writeln!(out, "\n👋 Thanks for playing!\n")?;
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            Command::NewGame => {
                controller.restart();
                writeln!(out, "\n🔄 New game started!")?;
            }
            Command::Difficulty(difficulty) => {
                controller.change_difficulty(difficulty);
                writeln!(out, "\n🔄 New {difficulty} game started!")?;
            }
            Command::Guess(text) => match controller.submit_input(text) {
                Ok(report) => {
                    if let Some(feedback) = guess_feedback(report.outcome) {
                        let feedback = if matches!(report.outcome, GuessOutcome::Hit { .. }) {
                            feedback.green()
                        } else {
                            feedback.red()
                        };
                        writeln!(out, "\n   {feedback}")?;
                    }
                }
                Err(err) => {
                    writeln!(out, "\n   ❌ {}", err.message(locale).red())?;
                }
            },
        }
    }
}

/// Prompt and read one trimmed line, `None` at end of input
fn get_user_input<R: BufRead, O: Write>(
    input: &mut R,
    out: &mut O,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "\n{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
