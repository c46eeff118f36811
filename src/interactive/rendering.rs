//! TUI rendering with ratatui
//!
//! Pure function of the application state; nothing here mutates the game.

use super::app::{App, InputMode, LETTER_COLUMNS, MessageStyle};
use crate::core::Difficulty;
use crate::game::{ALPHABET, LetterState, Session, Status};
use crate::output::formatters::{
    gallows_frame, outcome_banner, stats_summary, used_letters, winrate_summary, word_display,
    wrong_counter,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<W>(f: &mut Frame, app: &App<W>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(4), // Guess form
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    let session = app.controller.session();

    render_header(f, session, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows and messages
            Constraint::Percentage(65), // Word, letters, stats
        ])
        .split(chunks[1]);

    render_side_panel(f, app, main_chunks[0]);
    render_main_panel(f, app, main_chunks[1]);

    render_form(f, app, chunks[2]);
    render_status(f, session, chunks[3]);
}

fn render_header(f: &mut Frame, session: &Session, area: Rect) {
    let header = Paragraph::new(format!("Hangman {}", session.difficulty()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_side_panel<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // Gallows
            Constraint::Min(3),     // Messages
        ])
        .split(area);

    render_gallows(f, app.controller.session(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_gallows(f: &mut Frame, session: &Session, area: Rect) {
    let color = match session.status() {
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
        Status::InProgress => Color::White,
    };

    let mut lines: Vec<Line> = gallows_frame(session.wrong_guesses())
        .iter()
        .map(|&row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();
    lines.push(Line::from(wrong_counter(session)));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Gallows ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(paragraph, area);
}

fn render_messages<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_main_panel<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Word
            Constraint::Length(4), // Letters
            Constraint::Length(3), // Used letters
            Constraint::Min(4),    // Stats
        ])
        .split(area);

    let session = app.controller.session();
    render_word(f, session, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_used_letters(f, session, chunks[2]);
    render_stats(f, app, chunks[3]);
}

fn render_word(f: &mut Frame, session: &Session, area: Rect) {
    let style = if session.is_over() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(word_display(session))
        .style(style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_letters<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let session = app.controller.session();
    let block = Block::default().title(" Letters ").borders(Borders::ALL);

    if let Some(banner) = outcome_banner(session.status()) {
        let color = if session.status() == Status::Won {
            Color::Green
        } else {
            Color::Red
        };
        let paragraph = Paragraph::new(banner)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let show_cursor = app.input_mode == InputMode::Letters;
    let lines: Vec<Line> = ALPHABET
        .chunks(LETTER_COLUMNS)
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    let mut style = letter_style(session.letter_state(letter));
                    if show_cursor && row * LETTER_COLUMNS + col == app.cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

fn letter_style(state: LetterState) -> Style {
    match state {
        LetterState::Available => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        LetterState::Hit => Style::default().fg(Color::Green),
        LetterState::Miss => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        LetterState::Locked => Style::default().fg(Color::DarkGray),
    }
}

fn render_used_letters(f: &mut Frame, session: &Session, area: Rect) {
    let paragraph = Paragraph::new(format!("Used Letters: {}", used_letters(session)))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_stats<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let stats = app.controller.stats();

    let content = vec![
        Line::from(stats_summary(stats)),
        Line::from(Span::styled(
            winrate_summary(stats),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Stats ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_form<W>(f: &mut Frame, app: &App<W>, area: Rect) {
    let session = app.controller.session();

    let (title, color) = if session.is_over() {
        (
            " Guess (disabled) | Press 'n' for new game or 'q' to quit ",
            Color::DarkGray,
        )
    } else {
        match app.input_mode {
            InputMode::Letters => (" Guess | TAB to type a letter ", Color::DarkGray),
            InputMode::Form => (
                " Guess | Enter to submit, ESC to cancel ",
                Color::Yellow,
            ),
        }
    };

    let mut content = vec![Line::from(Span::styled(
        app.input_buffer.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(err) = app.validation_error {
        content.push(Line::from(Span::styled(
            err.message(app.locale),
            Style::default().fg(Color::Red),
        )));
    }

    let input = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, session: &Session, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut spans = vec![Span::raw("Group: ")];
    for (index, difficulty) in Difficulty::ALL.into_iter().enumerate() {
        let style = if difficulty == session.difficulty() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}:{difficulty}", index + 1), style));
        spans.push(Span::raw("  "));
    }
    let groups = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(groups, chunks[0]);

    let help = Paragraph::new("F5/Ctrl+R: Restart | ESC: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
