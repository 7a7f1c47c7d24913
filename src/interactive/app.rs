//! TUI application state and logic

use crate::game::{GameMode, GameSession, GuessOutcome, SessionState};
use crate::roster::{Roster, SUGGESTION_LIMIT};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub roster: &'a Roster,
    pub session: GameSession,
    /// Day of the daily pick; `None` for a practice round
    pub date: Option<NaiveDate>,
    pub input_buffer: String,
    pub suggestions: Vec<String>,
    pub selected: Option<usize>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<'a> App<'a> {
    #[must_use]
    pub fn new(roster: &'a Roster, session: GameSession, date: Option<NaiveDate>) -> Self {
        let intro = match session.mode() {
            GameMode::Autocomplete => "Type a fighter's name; ↑/↓ pick a suggestion, Enter guesses.",
            GameMode::Freetext => "Type a name or a description (division, country, age).",
            GameMode::Hangman => "Type one letter and press Enter. Only misses cost attempts.",
        };

        let mut app = Self {
            roster,
            session,
            date,
            input_buffer: String::new(),
            suggestions: Vec::new(),
            selected: None,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message("Who is today's fighter?", MessageStyle::Info);
        app.add_message(intro, MessageStyle::Info);
        app
    }

    pub fn push_char(&mut self, c: char) {
        if self.session.is_over() {
            return;
        }
        self.input_buffer.push(c);
        self.refresh_suggestions();
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
        self.refresh_suggestions();
    }

    /// Recompute autocomplete suggestions from the input buffer
    pub fn refresh_suggestions(&mut self) {
        self.selected = None;
        if self.session.mode() != GameMode::Autocomplete || self.session.is_over() {
            self.suggestions.clear();
            return;
        }
        self.suggestions = self
            .roster
            .suggestions(&self.input_buffer, SUGGESTION_LIMIT)
            .into_iter()
            .map(|entry| entry.name.clone())
            .collect();
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.suggestions.len() => i + 1,
            Some(i) => i,
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Copy the highlighted (or first) suggestion into the input buffer
    pub fn accept_suggestion(&mut self) {
        let index = self.selected.unwrap_or(0);
        if let Some(name) = self.suggestions.get(index).cloned() {
            self.input_buffer = name;
            self.suggestions.clear();
            self.selected = None;
        }
    }

    /// Submit the input buffer (or the highlighted suggestion) as a guess
    pub fn submit_guess(&mut self) {
        if self.selected.is_some() {
            self.accept_suggestion();
        }
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input, self.roster) {
            Ok(GuessOutcome::Ignored) => {
                if self.session.mode().is_letter_mode() && !input.trim().is_empty() {
                    self.add_message("Letter already guessed", MessageStyle::Info);
                }
            }
            Ok(GuessOutcome::Scored(state)) => self.announce(state),
            Err(e) => {
                // Keep the text so it can be corrected
                self.input_buffer = input;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }

        self.refresh_suggestions();
    }

    fn announce(&mut self, state: SessionState) {
        let name = self.session.target().name.clone();
        match state {
            SessionState::Won => {
                let attempts = self.session.attempts_used();
                self.add_message(
                    &format!("🥊 Correct! It was {name} ({attempts} attempts)"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'q' to quit. Come back tomorrow!", MessageStyle::Info);
            }
            SessionState::Lost => {
                self.add_message(
                    &format!("Out of attempts - it was {name}"),
                    MessageStyle::Error,
                );
                self.add_message("Press 'q' to quit. Come back tomorrow!", MessageStyle::Info);
            }
            SessionState::Active => {
                let remaining = self.session.remaining_attempts();
                self.add_message(
                    &format!("{remaining} attempts left"),
                    MessageStyle::Info,
                );
            }
        }
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
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

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Char('q') if app.session.is_over() => {
                    app.should_quit = true;
                }
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Down => app.select_next(),
                KeyCode::Up => app.select_previous(),
                KeyCode::Tab => app.accept_suggestion(),
                KeyCode::Enter => app.submit_guess(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
