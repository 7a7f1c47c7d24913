//! Display functions for command results and game progress

use super::formatters::{blur_bar, colored_badge, colored_tiles};
use crate::commands::{DailyInfo, ScoreResult};
use crate::core::{RosterEntry, TraitKind, tiles_to_emoji};
use crate::game::{GameMode, GameSession, GuessRecord, SessionState};
use colored::Colorize;

/// Print one scored guess: tiles, then trait badges
pub fn print_guess_record(record: &GuessRecord, turn: usize) {
    println!(
        "\n{} {}",
        format!("{turn}.").bright_black(),
        colored_tiles(&record.tiles)
    );

    if record.traits.is_empty() {
        return;
    }

    let badges: Vec<String> = TraitKind::ALL
        .iter()
        .filter_map(|kind| {
            record
                .traits
                .get(kind)
                .map(|feedback| colored_badge(*kind, *feedback, record.entry.as_ref()))
        })
        .collect();
    println!("   {}", badges.join(" "));
}

/// Print attempts, blur and the masked name
pub fn print_session_status(session: &GameSession) {
    println!(
        "\nAttempts: {} / {}   Image blur: [{}] {}px",
        session.attempts_used().to_string().bright_cyan().bold(),
        session.max_attempts(),
        blur_bar(session.blur(), session.initial_blur(), 14).cyan(),
        session.blur()
    );
    println!("Name:     {}", session.masked_target().to_uppercase().bold());

    if session.mode() == GameMode::Hangman {
        let letters: String = session.guessed_letters().into_iter().collect();
        if !letters.is_empty() {
            println!("Guessed:  {}", letters.to_uppercase().bright_black());
        }
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession) {
    let target = session.target();
    println!("\n{}", "═".repeat(70).bright_cyan());

    match session.state() {
        SessionState::Won => {
            println!(
                "{}",
                format!("    🥊  CORRECT! It was {}  🥊", target.name)
                    .bright_green()
                    .bold()
            );
            println!(
                "\n  Found in {} {}",
                session.attempts_used().to_string().bright_cyan().bold(),
                if session.attempts_used() == 1 {
                    "attempt"
                } else {
                    "attempts"
                }
            );
        }
        SessionState::Lost => {
            println!(
                "{}",
                format!("    Out of attempts - it was {}", target.name)
                    .bright_red()
                    .bold()
            );
        }
        SessionState::Active => {}
    }

    print_entry_details(target);
    println!("{}", "═".repeat(70).bright_cyan());
}

fn print_entry_details(entry: &RosterEntry) {
    for kind in TraitKind::ALL {
        let value = kind.value_of(entry);
        if !value.is_empty() {
            println!("  {:<13} {}", format!("{}:", kind.label()), value);
        }
    }
    if !entry.image.is_empty() {
        println!("  {:<13} {}", "Image:", entry.image);
    }
}

/// Print the result of the score command
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}   Guess: {}",
        result.target.bright_yellow().bold(),
        result.guess.bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n  {}", colored_tiles(&result.tiles));
    println!("  {}", tiles_to_emoji(&result.tiles));

    if let Some(traits) = &result.traits {
        let badges: Vec<String> = traits
            .iter()
            .map(|(kind, feedback)| colored_badge(*kind, *feedback, result.guessed_entry.as_ref()))
            .collect();
        println!("\n  {}", badges.join(" "));
    }

    println!();
    if result.exact {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Print today's pick; the name is hidden unless `reveal` is set
pub fn print_daily_info(info: &DailyInfo, reveal: bool) {
    println!("\n📅 Daily fighter for {}", info.pick.date.to_string().bright_cyan());
    if reveal {
        println!("   {}", info.pick.entry.name.bright_yellow().bold());
        print_entry_details(&info.pick.entry);
    } else {
        let letters = info
            .pick
            .entry
            .name
            .chars()
            .filter(|c| !c.is_whitespace())
            .count();
        println!("   {letters} letters (use --reveal to show the name)");
    }
    println!("   State file: {}", info.state_path.display());
}

/// Print autocomplete matches for a prefix
pub fn print_suggestions(query: &str, matches: &[&RosterEntry]) {
    if matches.is_empty() {
        println!("No fighters start with '{}'\n", query.trim());
        return;
    }
    for entry in matches {
        println!("  • {}", entry.name);
    }
    println!();
}
