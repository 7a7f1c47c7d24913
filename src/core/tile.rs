//! Letter-tile scoring for guessed names
//!
//! A guess is compared to the target position by position and every character
//! of the (normalized) guess receives one of three classifications:
//! - Match (right letter, right position)
//! - Partial (letter occurs elsewhere in the target)
//! - Absent (letter not available in the target)

use super::normalize::normalize;
use rustc_hash::FxHashMap;

/// Feedback for one character or one trait badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Match,
    Partial,
    Absent,
}

impl Classification {
    /// Emoji square used in shareable summaries
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Match => '🟩',
            Self::Partial => '🟨',
            Self::Absent => '🟥',
        }
    }

    /// Single ASCII symbol: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Match => 'G',
            Self::Partial => 'Y',
            Self::Absent => '-',
        }
    }
}

/// One scored character of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub ch: char,
    pub class: Classification,
}

/// Score `guess` against `target`
///
/// Returns one classification per character of the normalized guess.
///
/// # Algorithm
/// 1. Normalize both strings (case, diacritics, whitespace)
/// 2. First pass: mark exact position matches and remove them from the pool of
///    available target letters
/// 3. Second pass: mark letters still available in the pool as partial,
///    consuming one occurrence each time
///
/// Whitespace never enters the pool. Guess characters past the end of the
/// target are always absent.
///
/// # Examples
/// ```
/// use fighterdle::core::{Classification::*, score};
///
/// assert_eq!(score("islam", "sails"), vec![Partial, Partial, Partial, Partial, Absent]);
/// assert_eq!(score("Łopez", "LOPEZ"), vec![Match; 5]);
/// ```
#[must_use]
pub fn score(target: &str, guess: &str) -> Vec<Classification> {
    let target: Vec<char> = normalize(target).chars().collect();
    let guess: Vec<char> = normalize(guess).chars().collect();
    classify(&target, &guess)
}

/// Score `guess` against `target`, keeping the normalized characters
#[must_use]
pub fn score_tiles(target: &str, guess: &str) -> Vec<Tile> {
    let target: Vec<char> = normalize(target).chars().collect();
    let guess: Vec<char> = normalize(guess).chars().collect();

    classify(&target, &guess)
        .into_iter()
        .zip(guess)
        .map(|(class, ch)| Tile { ch, class })
        .collect()
}

/// Render tiles as an emoji row, e.g. "🟩🟨🟥"
///
/// Spaces in the guess stay spaces so that words remain visible.
#[must_use]
pub fn tiles_to_emoji(tiles: &[Tile]) -> String {
    tiles
        .iter()
        .map(|tile| {
            if tile.ch == ' ' {
                ' '
            } else {
                tile.class.to_emoji()
            }
        })
        .collect()
}

/// Count tiles with the given classification
#[must_use]
pub fn count_class(tiles: &[Tile], class: Classification) -> usize {
    tiles.iter().filter(|tile| tile.class == class).count()
}

fn classify(target: &[char], guess: &[char]) -> Vec<Classification> {
    let mut result = vec![Classification::Absent; guess.len()];

    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in target.iter().filter(|c| !c.is_whitespace()) {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = Classification::Match;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present elsewhere, only within the target's length
    for (i, g) in guess.iter().enumerate().take(target.len()) {
        if result[i] == Classification::Match {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            result[i] = Classification::Partial;
            *count -= 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Match, Partial};
    use super::*;

    #[test]
    fn identical_strings_all_match() {
        for name in ["Conor Mcgregor", "Islam Makhachev", "Jon Jones", "a"] {
            assert!(score(name, name).iter().all(|&c| c == Match), "{name}");
        }
    }

    #[test]
    fn empty_guess_scores_nothing() {
        assert!(score("Jon Jones", "").is_empty());
        assert!(score("Jon Jones", "   ").is_empty());
    }

    #[test]
    fn case_and_diacritics_ignored() {
        assert_eq!(score("Łopez", "lopez"), vec![Match; 5]);
        assert_eq!(score("jiri prochazka", "Jiří Procházka"), vec![Match; 14]);
        assert_eq!(score("Nguyễn", "nguyen"), vec![Match; 6]);
    }

    #[test]
    fn duplicate_letter_credited_once() {
        // ISLAM has exactly one S: the first S is partial, the second absent
        let result = score("islam", "sails");
        assert_eq!(result, vec![Partial, Partial, Partial, Partial, Absent]);
    }

    #[test]
    fn exact_match_takes_priority_over_partial() {
        // The second O of ROBOT sits on FLOOR's second O
        let result = score("floor", "robot");
        assert_eq!(result, vec![Partial, Partial, Absent, Match, Absent]);
    }

    #[test]
    fn duplicates_bounded_by_target_occurrences() {
        let target = "jon jones";
        let guess = "ooo ooooo";
        let result = score(target, guess);
        let credited = result
            .iter()
            .zip(guess.chars())
            .filter(|&(&class, ch)| ch == 'o' && class != Absent)
            .count();
        assert_eq!(credited, 2);
        assert_eq!(result[1], Match);
        assert_eq!(result[5], Match);
    }

    #[test]
    fn every_equal_position_is_match() {
        let target = "dustin poirier";
        let guess = "justin gaethje";
        let result = score(target, guess);
        let t: Vec<char> = target.chars().collect();
        let g: Vec<char> = guess.chars().collect();
        for i in 0..g.len() {
            if g[i] == t[i] {
                assert_eq!(result[i], Match, "index {i}");
            } else {
                assert_ne!(result[i], Match, "index {i}");
            }
        }
    }

    #[test]
    fn trailing_guess_characters_are_absent() {
        // "jon" fits; the extra letters are beyond the target's end
        let result = score("jon", "jonjon");
        assert_eq!(result, vec![Match, Match, Match, Absent, Absent, Absent]);
    }

    #[test]
    fn shorter_guess_is_scored_positionally() {
        let result = score("makhachev", "mak");
        assert_eq!(result, vec![Match, Match, Match]);
    }

    #[test]
    fn spaces_match_only_in_place() {
        // The space in the guess lines up with nothing in a single-word target
        let result = score("adesanya", "ad sanya");
        assert_eq!(result[2], Absent);
        assert_eq!(score("jon jones", "jon jones")[3], Match);
    }

    #[test]
    fn tiles_keep_normalized_characters() {
        let tiles = score_tiles("Jan Błachowicz", "JAN B");
        let chars: String = tiles.iter().map(|t| t.ch).collect();
        assert_eq!(chars, "jan b");
        assert_eq!(count_class(&tiles, Match), 5);
    }

    #[test]
    fn emoji_row_preserves_word_gaps() {
        let tiles = score_tiles("jon jones", "jon bones");
        assert_eq!(tiles_to_emoji(&tiles), "🟩🟩🟩 🟥🟩🟩🟩🟩");
    }

    #[test]
    fn symbols_are_stable() {
        assert_eq!(Match.symbol(), 'G');
        assert_eq!(Partial.symbol(), 'Y');
        assert_eq!(Absent.symbol(), '-');
    }
}
