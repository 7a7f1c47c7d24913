//! Formatting utilities for terminal output

use crate::core::{Classification, RosterEntry, Tile, TraitFeedback, TraitKind};
use colored::{ColoredString, Colorize};

/// Render tiles as colored letter blocks, e.g. " C  O  N "
#[must_use]
pub fn colored_tiles(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            if tile.ch == ' ' {
                return "  ".to_string();
            }
            let letter = format!(" {} ", tile.ch.to_uppercase()).black().bold();
            paint_class(letter, tile.class).to_string()
        })
        .collect()
}

fn paint_class(text: ColoredString, class: Classification) -> ColoredString {
    match class {
        Classification::Match => text.on_green(),
        Classification::Partial => text.on_yellow(),
        Classification::Absent => text.on_red(),
    }
}

/// Badge text for one trait, e.g. "Division: Welterweight ↓"
///
/// `shown` is the guessed value when the guess resolved to an entry.
#[must_use]
pub fn badge_text(kind: TraitKind, feedback: TraitFeedback, shown: Option<&RosterEntry>) -> String {
    let mut text = kind.label().to_string();
    if let Some(entry) = shown {
        let value = kind.value_of(entry);
        if !value.is_empty() {
            text.push_str(": ");
            text.push_str(&value);
        }
    }
    if let Some(direction) = feedback.direction {
        text.push(' ');
        text.push(direction.arrow());
    }
    text
}

/// Badge text painted by classification
#[must_use]
pub fn colored_badge(kind: TraitKind, feedback: TraitFeedback, shown: Option<&RosterEntry>) -> String {
    let text = format!("[{}]", badge_text(kind, feedback, shown));
    match feedback.class {
        Classification::Match => text.green().bold().to_string(),
        Classification::Partial => text.yellow().to_string(),
        Classification::Absent => text.bright_black().to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much blur is left on the image
#[must_use]
pub fn blur_bar(blur: u32, initial_blur: u32, width: usize) -> String {
    create_progress_bar(f64::from(blur), f64::from(initial_blur), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn blur_bar_tracks_blur() {
        assert_eq!(blur_bar(7, 14, 4), "██░░");
        assert_eq!(blur_bar(0, 14, 4), "░░░░");
    }

    #[test]
    fn badge_shows_value_and_arrow() {
        let entry = RosterEntry::new("Alex Pereira").with_division("Light Heavyweight");
        let feedback = TraitFeedback {
            class: Classification::Partial,
            direction: Some(Direction::Down),
        };
        assert_eq!(
            badge_text(TraitKind::Division, feedback, Some(&entry)),
            "Division: Light Heavyweight ↓"
        );
    }

    #[test]
    fn badge_without_entry_is_label_only() {
        assert_eq!(
            badge_text(TraitKind::Country, TraitFeedback::MATCH, None),
            "Country"
        );
    }
}
