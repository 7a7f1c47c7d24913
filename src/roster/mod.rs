//! Fighter roster
//!
//! The candidate pool for the daily target: loading, organization filtering,
//! name lookup and prefix autocomplete.

mod embedded;
pub mod loader;

pub use embedded::DEFAULT_DATASET;

use crate::core::{RosterEntry, normalize};
use crate::error::{GameError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Default number of autocomplete suggestions
pub const SUGGESTION_LIMIT: usize = 20;

/// A non-empty, immutable list of roster entries
#[derive(Debug, Clone)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from loaded entries
    ///
    /// # Errors
    /// Returns `GameError::EmptyRoster` if `entries` is empty.
    pub fn new(entries: Vec<RosterEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        Ok(Self { entries })
    }

    /// Keep only entries whose organization contains `tag`
    ///
    /// Comparison ignores case and diacritics; an empty tag keeps everything.
    ///
    /// # Errors
    /// Returns `GameError::EmptyRoster` if nothing is left after filtering.
    ///
    /// # Examples
    /// ```
    /// use fighterdle::core::RosterEntry;
    /// use fighterdle::roster::Roster;
    ///
    /// let roster = Roster::new(vec![
    ///     RosterEntry::new("Jon Jones").with_organization("UFC"),
    ///     RosterEntry::new("Francis Ngannou").with_organization("PFL"),
    /// ])
    /// .unwrap();
    ///
    /// let ufc = roster.filter_organization("ufc").unwrap();
    /// assert_eq!(ufc.len(), 1);
    /// ```
    pub fn filter_organization(self, tag: &str) -> Result<Self> {
        let tag = normalize(tag);
        if tag.is_empty() {
            return Ok(self);
        }

        let before = self.entries.len();
        let entries: Vec<RosterEntry> = self
            .entries
            .into_iter()
            .filter(|entry| normalize(&entry.organization).contains(&tag))
            .collect();

        tracing::debug!(%tag, before, after = entries.len(), "filtered roster by organization");
        Self::new(entries)
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty roster cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry named `name` (case, diacritic and spacing insensitive)
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&RosterEntry> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.normalized_name() == wanted)
    }

    /// Entries whose name starts with `query`, in roster order
    ///
    /// Returns nothing for a blank query.
    #[must_use]
    pub fn suggestions(&self, query: &str, limit: usize) -> Vec<&RosterEntry> {
        let prefix = normalize(query);
        if prefix.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|entry| entry.normalized_name().starts_with(&prefix))
            .take(limit)
            .collect()
    }

    /// Pick a uniformly random entry
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &RosterEntry {
        // Non-empty by construction
        self.entries.choose(rng).unwrap_or(&self.entries[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Roster {
        Roster::new(vec![
            RosterEntry::new("Conor McGregor").with_organization("UFC"),
            RosterEntry::new("Charles Oliveira").with_organization("UFC"),
            RosterEntry::new("Jiří Procházka").with_organization("UFC"),
            RosterEntry::new("Mamed Khalidov").with_organization("KSW"),
            RosterEntry::new("Patricio Pitbull").with_organization("Bellator MMA"),
        ])
        .unwrap()
    }

    #[test]
    fn empty_roster_rejected() {
        assert_eq!(Roster::new(Vec::new()).unwrap_err(), GameError::EmptyRoster);
    }

    #[test]
    fn filter_keeps_matching_organizations() {
        let roster = sample().filter_organization("UFC").unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.entries().iter().all(|e| e.organization == "UFC"));
    }

    #[test]
    fn filter_is_substring_and_case_insensitive() {
        let roster = sample().filter_organization("bellator").unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.entries()[0].name, "Patricio Pitbull");
    }

    #[test]
    fn filter_to_nothing_is_empty_roster() {
        let result = sample().filter_organization("ONE Championship");
        assert_eq!(result.unwrap_err(), GameError::EmptyRoster);
    }

    #[test]
    fn blank_filter_keeps_everything() {
        assert_eq!(sample().filter_organization("  ").unwrap().len(), 5);
    }

    #[test]
    fn find_ignores_case_and_diacritics() {
        let roster = sample();
        assert_eq!(
            roster.find("jiri prochazka").map(|e| e.name.as_str()),
            Some("Jiří Procházka")
        );
        assert!(roster.find("CONOR MCGREGOR").is_some());
        assert!(roster.find("Conor").is_none());
        assert!(roster.find("   ").is_none());
    }

    #[test]
    fn suggestions_match_prefix_in_order() {
        let roster = sample();
        let names: Vec<&str> = roster
            .suggestions("c", SUGGESTION_LIMIT)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Conor McGregor", "Charles Oliveira"]);
    }

    #[test]
    fn suggestions_respect_limit_and_blank_query() {
        let roster = sample();
        assert_eq!(roster.suggestions("c", 1).len(), 1);
        assert!(roster.suggestions("", SUGGESTION_LIMIT).is_empty());
        assert!(roster.suggestions("zz", SUGGESTION_LIMIT).is_empty());
    }

    #[test]
    fn choose_returns_roster_member() {
        let roster = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = roster.choose(&mut rng);
            assert!(roster.entries().contains(picked));
        }
    }
}
