//! TUI rendering with ratatui
//!
//! Visualizations for the guessing game interface.

use super::app::{App, MessageStyle};
use crate::core::{Classification, TraitKind};
use crate::game::{GameMode, GuessRecord, SessionState};
use crate::output::formatters::badge_text;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Guess history
            Constraint::Percentage(40), // Clues and messages
        ])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn class_color(class: Classification) -> Color {
    match class {
        Classification::Match => Color::Green,
        Classification::Partial => Color::Yellow,
        Classification::Absent => Color::Red,
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.date {
        Some(date) => format!("🥊 FIGHTERDLE - {date}"),
        None => "🥊 FIGHTERDLE - Practice".to_string(),
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            app.session.masked_target().to_uppercase(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn tile_line(record: &GuessRecord, turn: usize) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{turn:>2}. "),
        Style::default().fg(Color::DarkGray),
    )];
    for tile in &record.tiles {
        if tile.ch == ' ' {
            spans.push(Span::raw("  "));
            continue;
        }
        spans.push(Span::styled(
            format!(" {} ", tile.ch.to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(class_color(tile.class))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn badge_line(record: &GuessRecord) -> Line<'static> {
    let mut spans = vec![Span::raw("    ")];
    for kind in TraitKind::ALL {
        let Some(feedback) = record.traits.get(&kind) else {
            continue;
        };
        let style = match feedback.class {
            Classification::Match => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Classification::Partial => Style::default().fg(Color::Yellow),
            Classification::Absent => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(
            format!("[{}] ", badge_text(kind, *feedback, record.entry.as_ref())),
            style,
        ));
    }
    Line::from(spans)
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();

    // Newest guess first
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, record)| {
            let mut lines = vec![tile_line(record, i + 1)];
            if !record.traits.is_empty() {
                lines.push(badge_line(record));
            }
            ListItem::new(lines)
        })
        .collect();

    let title = if app.session.mode() == GameMode::Hangman {
        " Letters "
    } else {
        " Guesses "
    };
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),      // Image clue
            Constraint::Percentage(50), // Suggestions
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_image_clue(f, app, chunks[0]);
    render_suggestions(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_image_clue(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(3)])
        .split(area);

    let session = &app.session;
    let image = if session.is_over() && !session.target().image.is_empty() {
        session.target().image.clone()
    } else {
        "(hidden until the game ends)".to_string()
    };
    f.render_widget(
        Paragraph::new(format!(" Image: {image}"))
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true }),
        chunks[0],
    );

    let percent = if session.initial_blur() == 0 {
        0
    } else {
        (u64::from(session.blur()) * 100 / u64::from(session.initial_blur())) as u16
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Image Blur ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .percent(percent.min(100))
        .label(format!("{}px", session.blur()));
    f.render_widget(gauge, chunks[1]);
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = if app.session.mode() == GameMode::Hangman {
        let letters: String = app.session.guessed_letters().into_iter().collect();
        vec![ListItem::new(format!("Guessed: {}", letters.to_uppercase()))]
    } else {
        app.suggestions
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let style = if app.selected == Some(i) {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(name.clone()).style(style)
            })
            .collect()
    };

    let title = if app.session.mode() == GameMode::Hangman {
        " Letters Used "
    } else {
        " Suggestions "
    };
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match (app.session.state(), app.session.mode()) {
        (SessionState::Won, _) => (" 🎉 CORRECT! | Press 'q' to quit ", Color::Green),
        (SessionState::Lost, _) => (" Out of attempts | Press 'q' to quit ", Color::Red),
        (SessionState::Active, GameMode::Hangman) => (" Guess a letter ", Color::Yellow),
        (SessionState::Active, GameMode::Freetext) => (" Guess (any text) ", Color::Yellow),
        (SessionState::Active, GameMode::Autocomplete) => {
            (" Guess a fighter | TAB to complete ", Color::Yellow)
        }
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let session = &app.session;
    let attempts = Paragraph::new(format!(
        "Attempts: {} / {}",
        session.attempts_used(),
        session.max_attempts()
    ))
    .alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let mode = Paragraph::new(format!("Mode: {}", session.mode())).alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let help_text = if session.is_over() {
        "q/Esc: Quit"
    } else {
        "Enter: Guess | ↑/↓: Suggestions | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
