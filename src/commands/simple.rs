//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::tiles_to_emoji;
use crate::error::GameError;
use crate::game::{GameMode, GameSession, GuessOutcome, SessionState};
use crate::output::{print_game_over, print_guess_record, print_session_status, print_suggestions};
use crate::roster::{Roster, SUGGESTION_LIMIT};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: &mut GameSession, roster: &Roster) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Fighterdle - Guess the Fighter               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    match session.mode() {
        GameMode::Autocomplete => {
            println!("Guess today's fighter by name. Each guess must be a fighter in the roster.");
            println!("Type '?prefix' to list matching names.");
        }
        GameMode::Freetext => {
            println!("Describe or name today's fighter. Names, divisions, countries and");
            println!("ages in your text are all scored.");
        }
        GameMode::Hangman => {
            println!("Guess the fighter's name one letter at a time. Only misses cost attempts.");
        }
    }
    println!("Tiles: green = right place, yellow = elsewhere in the name, red = not there.");
    println!("Commands: 'quit' to exit\n");

    print_session_status(session);

    while !session.is_over() {
        let input = get_user_input("Guess")?;

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\n👋 Come back tomorrow!\n");
                return Ok(());
            }
            _ => {}
        }

        if let Some(prefix) = suggestion_query(&input, session.mode()) {
            print_suggestions(prefix, &roster.suggestions(prefix, SUGGESTION_LIMIT));
            continue;
        }

        match session.submit(&input, roster) {
            Ok(GuessOutcome::Ignored) => {
                if session.mode().is_letter_mode() && !input.trim().is_empty() {
                    println!("{}", "Letter already guessed.".bright_black());
                }
            }
            Ok(GuessOutcome::Scored(state)) => {
                if let Some(record) = session.history().last() {
                    print_guess_record(record, session.history().len());
                }
                if state == SessionState::Active {
                    print_session_status(session);
                }
            }
            Err(e @ (GameError::UnknownGuess(_) | GameError::InvalidLetter(_))) => {
                println!("❌ {e}\n");
            }
            Err(e) => return Err(e.to_string()),
        }
    }

    print_game_over(session);

    if session.mode() != GameMode::Hangman {
        println!("\n  Share:");
        for record in session.history() {
            println!("    {}", tiles_to_emoji(&record.tiles));
        }
        println!();
    }

    Ok(())
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

/// Prefix of a `?prefix` suggestion request; only names can be looked up
fn suggestion_query(input: &str, mode: GameMode) -> Option<&str> {
    if mode == GameMode::Autocomplete {
        input.strip_prefix('?')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_mark_lists_names_in_autocomplete() {
        assert_eq!(suggestion_query("?con", GameMode::Autocomplete), Some("con"));
        assert_eq!(suggestion_query("?", GameMode::Autocomplete), Some(""));
        assert_eq!(suggestion_query("Conor", GameMode::Autocomplete), None);
    }

    #[test]
    fn question_mark_is_a_guess_in_other_modes() {
        assert_eq!(suggestion_query("?", GameMode::Hangman), None);
        assert_eq!(suggestion_query("?con", GameMode::Freetext), None);
    }
}
