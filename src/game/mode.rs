//! Game modes
//!
//! All modes share the same scorer and session rules; they differ in what a
//! guess is and how traits are scored.

use std::fmt;
use std::str::FromStr;

/// How guesses are entered and scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Guess must name a roster entry; traits compare the two entries
    #[default]
    Autocomplete,
    /// Any text is a guess; traits are found in the text
    Freetext,
    /// One letter per guess; only misses cost attempts
    Hangman,
}

impl GameMode {
    /// Create a mode from its name
    ///
    /// Supported names: "autocomplete" ("names"), "freetext" ("text"), "hangman" ("letters")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "autocomplete" | "names" => Some(Self::Autocomplete),
            "freetext" | "text" => Some(Self::Freetext),
            "hangman" | "letters" => Some(Self::Hangman),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Autocomplete => "autocomplete",
            Self::Freetext => "freetext",
            Self::Hangman => "hangman",
        }
    }

    /// Whether guesses are single letters
    #[must_use]
    pub const fn is_letter_mode(self) -> bool {
        matches!(self, Self::Hangman)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            format!("Unknown game mode: {s} (expected autocomplete, freetext or hangman)")
        })
    }
}
