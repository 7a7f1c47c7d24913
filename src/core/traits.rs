//! Trait badge scoring
//!
//! Besides the name tiles, every guess is scored on the target's traits:
//! division (weight class), country, organization and age. Two comparisons
//! exist:
//! - [`compare_entries`] when the guess resolved to a roster entry
//! - [`score_traits_text`] when the guess is free text

use super::entry::{RosterEntry, parse_leading_int};
use super::normalize::{compact, normalize};
use super::tile::Classification;
use std::collections::BTreeMap;

/// Weight-class keywords from lightest to heaviest
///
/// Index order drives the up/down hint for the division badge.
pub const WEIGHT_CLASSES: [&str; 9] = [
    "straw",
    "fly",
    "bantam",
    "feather",
    "light",
    "welter",
    "middle",
    "lightheavy",
    "heavy",
];

/// A scored, non-name attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TraitKind {
    Division,
    Country,
    Organization,
    Age,
}

impl TraitKind {
    pub const ALL: [Self; 4] = [Self::Division, Self::Country, Self::Organization, Self::Age];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Division => "Division",
            Self::Country => "Country",
            Self::Organization => "Organization",
            Self::Age => "Age",
        }
    }

    /// The value of this trait on an entry, formatted for display
    #[must_use]
    pub fn value_of(self, entry: &RosterEntry) -> String {
        match self {
            Self::Division => entry.division.clone(),
            Self::Country => entry.country.clone(),
            Self::Organization => entry.organization.clone(),
            Self::Age => entry.age.map(|age| age.to_string()).unwrap_or_default(),
        }
    }
}

/// Where the target lies relative to the guessed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Target is higher (heavier / older) than the guess
    Up,
    /// Target is lower (lighter / younger) than the guess
    Down,
}

impl Direction {
    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Up => '↑',
            Self::Down => '↓',
        }
    }

    /// Direction from a guessed ordinal towards the target ordinal
    fn towards<T: Ord>(guess: T, target: T) -> Option<Self> {
        match guess.cmp(&target) {
            std::cmp::Ordering::Less => Some(Self::Up),
            std::cmp::Ordering::Greater => Some(Self::Down),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Classification of one trait, with an optional hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraitFeedback {
    pub class: Classification,
    pub direction: Option<Direction>,
}

impl TraitFeedback {
    pub const MATCH: Self = Self {
        class: Classification::Match,
        direction: None,
    };

    pub const ABSENT: Self = Self {
        class: Classification::Absent,
        direction: None,
    };

    const fn absent_towards(direction: Option<Direction>) -> Self {
        Self {
            class: Classification::Absent,
            direction,
        }
    }

    const fn partial_towards(direction: Option<Direction>) -> Self {
        Self {
            class: Classification::Partial,
            direction,
        }
    }
}

/// Feedback for every trait of a guess
pub type TraitScores = BTreeMap<TraitKind, TraitFeedback>;

/// Index of the weight class named in `text`, if any
///
/// The longest keyword found wins, so "light heavyweight" maps to
/// `lightheavy` rather than `light` or `heavy`.
///
/// # Examples
/// ```
/// use fighterdle::core::{WEIGHT_CLASSES, weight_class_index};
///
/// let idx = weight_class_index("Light Heavyweight").unwrap();
/// assert_eq!(WEIGHT_CLASSES[idx], "lightheavy");
/// assert_eq!(weight_class_index("Catchweight"), None);
/// ```
#[must_use]
pub fn weight_class_index(text: &str) -> Option<usize> {
    let text = compact(text);
    WEIGHT_CLASSES
        .iter()
        .enumerate()
        .filter(|(_, keyword)| text.contains(*keyword))
        .max_by_key(|(idx, keyword)| (keyword.len(), std::cmp::Reverse(*idx)))
        .map(|(idx, _)| idx)
}

/// Compare the traits of a guessed roster entry with the target's
#[must_use]
pub fn compare_entries(target: &RosterEntry, guess: &RosterEntry) -> TraitScores {
    let mut scores = TraitScores::new();
    scores.insert(
        TraitKind::Division,
        compare_division(&target.division, &guess.division),
    );
    scores.insert(
        TraitKind::Country,
        compare_exact(&target.country, &guess.country),
    );
    scores.insert(
        TraitKind::Organization,
        compare_exact(&target.organization, &guess.organization),
    );
    scores.insert(TraitKind::Age, compare_age(target.age, guess.age));
    scores
}

/// Score the target's traits against free guess text
///
/// A text trait matches when the target's normalized value appears anywhere in
/// the normalized guess. The division is partial when the guess names a
/// different weight class; the age is read from the first number in the text.
#[must_use]
pub fn score_traits_text(target: &RosterEntry, raw_guess: &str) -> TraitScores {
    let guess = normalize(raw_guess);

    let mut scores = TraitScores::new();
    scores.insert(
        TraitKind::Division,
        text_division(&target.division, &guess),
    );
    scores.insert(TraitKind::Country, text_contains(&target.country, &guess));
    scores.insert(
        TraitKind::Organization,
        text_contains(&target.organization, &guess),
    );
    scores.insert(
        TraitKind::Age,
        compare_age(target.age, first_number(&guess)),
    );
    scores
}

/// Age feedback: match on equality, otherwise a direction when both are known
#[must_use]
pub fn compare_age(target: Option<u32>, guess: Option<u32>) -> TraitFeedback {
    match (target, guess) {
        (Some(t), Some(g)) if t == g => TraitFeedback::MATCH,
        (Some(t), Some(g)) => TraitFeedback::absent_towards(Direction::towards(g, t)),
        _ => TraitFeedback::ABSENT,
    }
}

fn compare_division(target: &str, guess: &str) -> TraitFeedback {
    let (target_key, guess_key) = (compact(target), compact(guess));
    if target_key.is_empty() || guess_key.is_empty() {
        return TraitFeedback::ABSENT;
    }
    if target_key == guess_key {
        return TraitFeedback::MATCH;
    }

    match (weight_class_index(target), weight_class_index(guess)) {
        (Some(t), Some(g)) if t != g => TraitFeedback::partial_towards(Direction::towards(g, t)),
        _ => TraitFeedback::ABSENT,
    }
}

fn compare_exact(target: &str, guess: &str) -> TraitFeedback {
    let target = normalize(target);
    if !target.is_empty() && target == normalize(guess) {
        TraitFeedback::MATCH
    } else {
        TraitFeedback::ABSENT
    }
}

fn text_contains(target: &str, normalized_guess: &str) -> TraitFeedback {
    let target = normalize(target);
    if !target.is_empty() && normalized_guess.contains(&target) {
        TraitFeedback::MATCH
    } else {
        TraitFeedback::ABSENT
    }
}

fn text_division(target: &str, normalized_guess: &str) -> TraitFeedback {
    if text_contains(target, normalized_guess) == TraitFeedback::MATCH {
        return TraitFeedback::MATCH;
    }

    let Some(guess_idx) = weight_class_index(normalized_guess) else {
        return TraitFeedback::ABSENT;
    };
    match weight_class_index(target) {
        Some(target_idx) if target_idx == guess_idx => TraitFeedback::ABSENT,
        Some(target_idx) => {
            TraitFeedback::partial_towards(Direction::towards(guess_idx, target_idx))
        }
        None => TraitFeedback::partial_towards(None),
    }
}

fn first_number(text: &str) -> Option<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .find(|token| !token.is_empty())
        .and_then(parse_leading_int)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fighter(name: &str, division: &str, country: &str, age: u32) -> RosterEntry {
        RosterEntry::new(name)
            .with_division(division)
            .with_country(country)
            .with_organization("UFC")
            .with_age(age)
    }

    #[test]
    fn keyword_lookup_prefers_longest() {
        let idx = |s| weight_class_index(s).map(|i| WEIGHT_CLASSES[i]);
        assert_eq!(idx("Lightweight"), Some("light"));
        assert_eq!(idx("Light Heavyweight"), Some("lightheavy"));
        assert_eq!(idx("Heavyweight"), Some("heavy"));
        assert_eq!(idx("Women's Strawweight"), Some("straw"));
        assert_eq!(idx("Women's Flyweight"), Some("fly"));
        assert_eq!(idx("Open"), None);
    }

    #[test]
    fn entries_with_same_traits_all_match() {
        let a = fighter("Islam Makhachev", "Lightweight", "Russia", 33);
        let scores = compare_entries(&a, &a.clone());
        assert!(scores.values().all(|f| *f == TraitFeedback::MATCH));
        assert_eq!(scores.len(), TraitKind::ALL.len());
    }

    #[test]
    fn heavier_guess_points_down() {
        let target = fighter("Islam Makhachev", "Lightweight", "Russia", 33);
        let guess = fighter("Alex Pereira", "Light Heavyweight", "Brazil", 37);
        let scores = compare_entries(&target, &guess);

        let division = scores[&TraitKind::Division];
        assert_eq!(division.class, Classification::Partial);
        assert_eq!(division.direction, Some(Direction::Down));

        let age = scores[&TraitKind::Age];
        assert_eq!(age.class, Classification::Absent);
        assert_eq!(age.direction, Some(Direction::Down));

        assert_eq!(scores[&TraitKind::Country], TraitFeedback::ABSENT);
        assert_eq!(scores[&TraitKind::Organization], TraitFeedback::MATCH);
    }

    #[test]
    fn lighter_and_younger_guess_points_up() {
        let target = fighter("Jon Jones", "Heavyweight", "USA", 37);
        let guess = fighter("Ilia Topuria", "Featherweight", "Spain", 27);
        let scores = compare_entries(&target, &guess);
        assert_eq!(scores[&TraitKind::Division].direction, Some(Direction::Up));
        assert_eq!(scores[&TraitKind::Age].direction, Some(Direction::Up));
    }

    #[test]
    fn unknown_division_has_no_hint() {
        let target = fighter("A", "Catchweight", "USA", 30);
        let guess = fighter("B", "Lightweight", "USA", 30);
        assert_eq!(
            compare_entries(&target, &guess)[&TraitKind::Division],
            TraitFeedback::ABSENT
        );
    }

    #[test]
    fn missing_age_is_absent_without_direction() {
        assert_eq!(compare_age(None, Some(30)), TraitFeedback::ABSENT);
        assert_eq!(compare_age(Some(30), None), TraitFeedback::ABSENT);
        assert_eq!(compare_age(Some(30), Some(30)), TraitFeedback::MATCH);
    }

    #[test]
    fn country_comparison_folds_diacritics() {
        let target = fighter("A", "Lightweight", "Česko", 30);
        let guess = fighter("B", "Lightweight", "cesko", 30);
        assert_eq!(
            compare_entries(&target, &guess)[&TraitKind::Country],
            TraitFeedback::MATCH
        );
    }

    #[test]
    fn text_traits_found_as_substrings() {
        let target = fighter("Conor McGregor", "Lightweight", "Ireland", 36);
        let scores = score_traits_text(&target, "Irish guy from IRELAND, UFC lightweight, 36");
        assert_eq!(scores[&TraitKind::Country], TraitFeedback::MATCH);
        assert_eq!(scores[&TraitKind::Organization], TraitFeedback::MATCH);
        assert_eq!(scores[&TraitKind::Division], TraitFeedback::MATCH);
        assert_eq!(scores[&TraitKind::Age], TraitFeedback::MATCH);
    }

    #[test]
    fn text_division_other_class_is_partial_with_hint() {
        let target = fighter("Conor McGregor", "Lightweight", "Ireland", 36);
        let scores = score_traits_text(&target, "welterweight maybe");
        let division = scores[&TraitKind::Division];
        assert_eq!(division.class, Classification::Partial);
        assert_eq!(division.direction, Some(Direction::Down));

        let scores = score_traits_text(&target, "a featherweight");
        assert_eq!(scores[&TraitKind::Division].direction, Some(Direction::Up));
    }

    #[test]
    fn text_without_traits_is_absent() {
        let target = fighter("Conor McGregor", "Lightweight", "Ireland", 36);
        let scores = score_traits_text(&target, "Dustin Poirier");
        assert!(scores.values().all(|f| *f == TraitFeedback::ABSENT));
    }

    #[test]
    fn text_age_takes_first_number() {
        let target = fighter("Conor McGregor", "Lightweight", "Ireland", 36);
        let scores = score_traits_text(&target, "born 1988, age 36");
        let age = scores[&TraitKind::Age];
        assert_eq!(age.class, Classification::Absent);
        assert_eq!(age.direction, Some(Direction::Down));
    }

    #[test]
    fn value_of_formats_age() {
        let entry = fighter("Jon Jones", "Heavyweight", "USA", 37);
        assert_eq!(TraitKind::Age.value_of(&entry), "37");
        assert_eq!(TraitKind::Age.value_of(&RosterEntry::new("x")), "");
    }
}
