//! Game session state machine
//!
//! A `GameSession` owns everything that changes during one game: attempts,
//! the image blur level, the guess history and the terminal state. The
//! presentation layer holds the session and reads it back after each guess.

use super::GameMode;
use crate::config::GameConfig;
use crate::core::{
    Classification, RosterEntry, Tile, TraitScores, compare_entries, normalize, score_tiles,
    score_traits_text,
};
use crate::error::{GameError, Result};
use crate::roster::Roster;
use rustc_hash::FxHashSet;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won,
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One scored guess, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub raw_input: String,
    pub tiles: Vec<Tile>,
    pub traits: TraitScores,
    /// The roster entry the guess resolved to (autocomplete mode only)
    pub entry: Option<RosterEntry>,
}

/// Result of submitting input to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Blank input, a repeated letter, or a finished game: nothing changed
    Ignored,
    /// The guess was scored and recorded; carries the state afterwards
    Scored(SessionState),
}

/// State of one game against one target
#[derive(Debug, Clone)]
pub struct GameSession {
    target: RosterEntry,
    target_key: String,
    mode: GameMode,
    max_attempts: u32,
    initial_blur: u32,
    blur_step: u32,
    blur: u32,
    attempts_used: u32,
    state: SessionState,
    history: Vec<GuessRecord>,
    revealed: FxHashSet<char>,
}

impl GameSession {
    /// Start a session against `target`
    #[must_use]
    pub fn new(target: RosterEntry, config: &GameConfig) -> Self {
        let target_key = target.normalized_name();
        Self {
            target,
            target_key,
            mode: config.mode,
            max_attempts: config.attempt_cap(),
            initial_blur: config.initial_blur,
            blur_step: config.blur_step(),
            blur: config.initial_blur,
            attempts_used: 0,
            state: SessionState::Active,
            history: Vec::new(),
            revealed: FxHashSet::default(),
        }
    }

    /// Submit raw guess input
    ///
    /// Blank input and guesses after the game ended are ignored without
    /// consuming an attempt.
    ///
    /// # Errors
    /// - `GameError::UnknownGuess` in autocomplete mode when the name is not in `roster`
    /// - `GameError::InvalidLetter` in hangman mode when the input is not one character
    ///
    /// Neither error consumes an attempt.
    ///
    /// # Examples
    /// ```
    /// use fighterdle::config::GameConfig;
    /// use fighterdle::core::RosterEntry;
    /// use fighterdle::game::{GameSession, GuessOutcome, SessionState};
    /// use fighterdle::roster::Roster;
    ///
    /// let roster = Roster::new(vec![
    ///     RosterEntry::new("Conor Mcgregor"),
    ///     RosterEntry::new("Dustin Poirier"),
    /// ])
    /// .unwrap();
    /// let config = GameConfig { max_attempts: 8, initial_blur: 12, ..GameConfig::default() };
    /// let mut session = GameSession::new(roster.entries()[0].clone(), &config);
    ///
    /// session.submit("Dustin Poirier", &roster).unwrap();
    /// assert_eq!((session.attempts_used(), session.blur()), (1, 10));
    ///
    /// let outcome = session.submit("conor mcgregor", &roster).unwrap();
    /// assert_eq!(outcome, GuessOutcome::Scored(SessionState::Won));
    /// assert_eq!(session.blur(), 0);
    /// ```
    pub fn submit(&mut self, raw: &str, roster: &Roster) -> Result<GuessOutcome> {
        if self.state.is_over() {
            tracing::debug!(state = ?self.state, "guess after game end ignored");
            return Ok(GuessOutcome::Ignored);
        }
        if raw.trim().is_empty() {
            return Ok(GuessOutcome::Ignored);
        }

        match self.mode {
            GameMode::Autocomplete => self.submit_name(raw, roster),
            GameMode::Freetext => Ok(self.submit_text(raw)),
            GameMode::Hangman => self.submit_letter(raw),
        }
    }

    fn submit_name(&mut self, raw: &str, roster: &Roster) -> Result<GuessOutcome> {
        // The target stays guessable even if the roster was filtered after it was picked
        let chosen = match roster.find(raw) {
            Some(entry) => entry.clone(),
            None if self.target.is_named(raw) => self.target.clone(),
            None => return Err(GameError::UnknownGuess(raw.trim().to_string())),
        };

        let won = chosen.normalized_name() == self.target_key;
        let record = GuessRecord {
            raw_input: raw.to_string(),
            tiles: score_tiles(&self.target.name, &chosen.name),
            traits: compare_entries(&self.target, &chosen),
            entry: Some(chosen),
        };
        Ok(self.record_attempt(record, won))
    }

    fn submit_text(&mut self, raw: &str) -> GuessOutcome {
        let won = normalize(raw) == self.target_key;
        let record = GuessRecord {
            raw_input: raw.to_string(),
            tiles: score_tiles(&self.target.name, raw),
            traits: score_traits_text(&self.target, raw),
            entry: None,
        };
        self.record_attempt(record, won)
    }

    fn submit_letter(&mut self, raw: &str) -> Result<GuessOutcome> {
        let normalized = normalize(raw);
        let mut chars = normalized.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            return Err(GameError::InvalidLetter(raw.trim().to_string()));
        };
        if !is_guessable(letter) {
            return Err(GameError::InvalidLetter(raw.trim().to_string()));
        }

        if !self.revealed.insert(letter) {
            tracing::debug!(%letter, "letter already guessed");
            return Ok(GuessOutcome::Ignored);
        }

        let hit = self.target_key.contains(letter);
        let record = GuessRecord {
            raw_input: raw.to_string(),
            tiles: vec![Tile {
                ch: letter,
                class: if hit {
                    Classification::Match
                } else {
                    Classification::Absent
                },
            }],
            traits: TraitScores::new(),
            entry: None,
        };

        if hit {
            let won = self.fully_revealed();
            self.history.push(record);
            if won {
                self.finish(SessionState::Won);
            }
            Ok(GuessOutcome::Scored(self.state))
        } else {
            Ok(self.record_attempt(record, false))
        }
    }

    /// Count an attempt and advance the state machine
    fn record_attempt(&mut self, record: GuessRecord, won: bool) -> GuessOutcome {
        self.history.push(record);
        self.attempts_used += 1;

        if won {
            self.finish(SessionState::Won);
        } else if self.attempts_used >= self.max_attempts {
            self.finish(SessionState::Lost);
        } else {
            self.blur = self.blur.saturating_sub(self.blur_step);
            tracing::debug!(
                attempts = self.attempts_used,
                blur = self.blur,
                "guess missed"
            );
        }

        GuessOutcome::Scored(self.state)
    }

    fn finish(&mut self, state: SessionState) {
        self.state = state;
        self.blur = 0;
        tracing::info!(
            outcome = ?state,
            attempts = self.attempts_used,
            target = %self.target.name,
            "game over"
        );
    }

    fn fully_revealed(&self) -> bool {
        self.target_key
            .chars()
            .filter(|&c| is_guessable(c))
            .all(|c| self.revealed.contains(&c))
    }

    /// Target name with unrevealed letters and digits shown as `_`
    ///
    /// Spaces and punctuation are always shown.
    /// Once the game is over the full name is shown.
    #[must_use]
    pub fn masked_target(&self) -> String {
        if self.state.is_over() {
            return self.target_key.clone();
        }
        self.target_key
            .chars()
            .map(|c| {
                if !is_guessable(c) || self.revealed.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    #[must_use]
    pub const fn target(&self) -> &RosterEntry {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_used)
    }

    /// Current blur radius of the image
    #[must_use]
    pub const fn blur(&self) -> u32 {
        self.blur
    }

    #[must_use]
    pub const fn initial_blur(&self) -> u32 {
        self.initial_blur
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Letters guessed so far in hangman mode, sorted
    #[must_use]
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.revealed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }
}

/// Characters a hangman player has to find
fn is_guessable(c: char) -> bool {
    c.is_alphanumeric()
}
