//! TUI application state and logic

use crate::core::{Difficulty, Locale, ValidationError};
use crate::game::{ALPHABET, Controller, GuessOutcome, GuessReport, Status};
use crate::output::formatters::guess_feedback;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Letters per row in the letter panel
pub const LETTER_COLUMNS: usize = 13;

/// Longest text accepted in the guess form
const MAX_FORM_INPUT: usize = 16;

/// Application state
pub struct App<W> {
    pub controller: Controller<W>,
    pub locale: Locale,
    pub input_mode: InputMode,
    /// Index into `ALPHABET` of the highlighted letter
    pub cursor: usize,
    pub input_buffer: String,
    pub validation_error: Option<ValidationError>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys guess letters directly
    Letters,
    /// Keys are typed into the guess form
    Form,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource> App<W> {
    #[must_use]
    pub fn new(controller: Controller<W>, locale: Locale) -> Self {
        Self {
            controller,
            locale,
            input_mode: InputMode::Letters,
            cursor: 0,
            input_buffer: String::new(),
            validation_error: None,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word before the hangman is complete.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess it, TAB to use the guess form".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Letter under the cursor
    #[must_use]
    pub const fn cursor_letter(&self) -> char {
        ALPHABET[self.cursor]
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.new_game(None);
                return;
            }
            KeyCode::F(5) => {
                self.new_game(None);
                return;
            }
            _ => {}
        }

        if self.controller.session().is_over() {
            self.handle_game_over_key(key.code);
            return;
        }

        match self.input_mode {
            InputMode::Letters => self.handle_letters_key(key.code),
            InputMode::Form => self.handle_form_key(key.code),
        }
    }

    fn handle_game_over_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                self.new_game(None);
            }
            KeyCode::Char(digit) => {
                if let Some(difficulty) = Difficulty::from_digit(digit) {
                    self.new_game(Some(difficulty));
                }
            }
            _ => {
                // Input is disabled until a new game starts
            }
        }
    }

    fn handle_letters_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.input_mode = InputMode::Form;
                self.add_message(
                    "Type one letter and press Enter (ESC to cancel)",
                    MessageStyle::Info,
                );
            }
            KeyCode::Left => {
                self.cursor = (self.cursor + ALPHABET.len() - 1) % ALPHABET.len();
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1) % ALPHABET.len();
            }
            KeyCode::Up | KeyCode::Down => {
                self.cursor = (self.cursor + LETTER_COLUMNS) % ALPHABET.len();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.guess(self.cursor_letter());
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.guess(c);
            }
            KeyCode::Char(digit) => {
                if let Some(difficulty) = Difficulty::from_digit(digit) {
                    self.new_game(Some(difficulty));
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.input_mode = InputMode::Letters;
                self.input_buffer.clear();
                self.validation_error = None;
            }
            KeyCode::Char(c) => {
                if self.input_buffer.chars().count() < MAX_FORM_INPUT {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_form();
            }
            _ => {}
        }
    }

    /// Guess a letter from the letter panel
    pub fn guess(&mut self, letter: char) {
        if let Some(index) = ALPHABET
            .iter()
            .position(|&l| l == letter.to_ascii_lowercase())
        {
            self.cursor = index;
        }

        let report = self.controller.submit_guess(letter);
        self.report(report);
    }

    /// Validate and submit the guess form
    pub fn submit_form(&mut self) {
        match self.controller.submit_input(&self.input_buffer) {
            Ok(report) => {
                self.input_buffer.clear();
                self.validation_error = None;
                self.report(report);
            }
            Err(err) => {
                debug!(input = %self.input_buffer, %err, "rejected guess");
                self.validation_error = Some(err);
            }
        }
    }

    /// Start a new game, switching group when `difficulty` is given
    ///
    /// Restarting without a group goes back to the default one.
    pub fn new_game(&mut self, difficulty: Option<Difficulty>) {
        match difficulty {
            Some(difficulty) => self.controller.change_difficulty(difficulty),
            None => self.controller.restart(),
        }

        self.input_buffer.clear();
        self.validation_error = None;
        self.cursor = 0;
        self.add_message(
            &format!(
                "New {} game started!",
                self.controller.session().difficulty()
            ),
            MessageStyle::Info,
        );
    }

    fn report(&mut self, report: GuessReport) {
        if let Some(text) = guess_feedback(report.outcome) {
            let style = if matches!(report.outcome, GuessOutcome::Hit { .. }) {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&text, style);
        }

        match report.finished {
            Some(Status::Won) => {
                self.add_message("🎉 You Won! 🎉", MessageStyle::Success);
            }
            Some(Status::Lost) => {
                let word = self.controller.session().secret().text().to_uppercase();
                self.add_message(
                    &format!("You Lose! The word was {word}"),
                    MessageStyle::Error,
                );
            }
            Some(Status::InProgress) | None => return,
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource>(app: App<W>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, W: WordSource>(
    terminal: &mut Terminal<B>,
    mut app: App<W>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
