//! One-shot scoring command
//!
//! Scores a guess against a named target without starting a session.

use crate::core::{
    RosterEntry, Tile, TraitScores, compare_entries, normalize, score_tiles, score_traits_text,
};
use crate::roster::Roster;

/// Result of scoring one guess
pub struct ScoreResult {
    pub target: String,
    pub guess: String,
    pub tiles: Vec<Tile>,
    /// Trait feedback, present when the target is a roster entry
    pub traits: Option<TraitScores>,
    /// The roster entry the guess names, if any
    pub guessed_entry: Option<RosterEntry>,
    pub exact: bool,
}

/// Score `guess` against `target`
///
/// When the target is in the roster, traits are scored too: against the
/// guessed entry if the guess names one, otherwise against the guess text.
///
/// # Errors
///
/// Returns an error if either the target or the guess is blank.
pub fn score_guess(roster: &Roster, target: &str, guess: &str) -> Result<ScoreResult, String> {
    if normalize(target).is_empty() {
        return Err("Target name must not be empty".to_string());
    }
    if normalize(guess).is_empty() {
        return Err("Guess must not be empty".to_string());
    }

    let target_entry = roster.find(target);
    let guessed_entry = roster.find(guess).cloned();

    let traits = target_entry.map(|entry| match &guessed_entry {
        Some(guessed) => compare_entries(entry, guessed),
        None => score_traits_text(entry, guess),
    });

    Ok(ScoreResult {
        target: target_entry.map_or_else(|| target.trim().to_string(), |e| e.name.clone()),
        guess: guess.trim().to_string(),
        tiles: score_tiles(target, guess),
        traits,
        guessed_entry,
        exact: normalize(target) == normalize(guess),
    })
}
