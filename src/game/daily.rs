//! Daily target selection
//!
//! One target per calendar day per device. The pick is stored as a
//! `(date, entry)` record; reloading on the same day returns the stored entry,
//! and a new day replaces it with a fresh random pick.

use crate::core::RosterEntry;
use crate::error::{GameError, Result};
use crate::store::KeyValueStore;
use chrono::{NaiveDate, Utc};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Store key of the persisted daily pick
pub const DAILY_PICK_KEY: &str = "dailyFighter";

/// The target chosen for a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPick {
    pub date: NaiveDate,
    pub entry: RosterEntry,
}

/// Today's date as used for daily picks (UTC calendar date)
#[must_use]
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Pick the target for `today`
///
/// Returns `persisted` unchanged when it is already for `today`, otherwise a
/// uniformly random entry from `roster` dated `today`. The caller is
/// responsible for persisting a new pick; [`DailySelector`] does both.
///
/// # Errors
/// Returns `GameError::EmptyRoster` if `roster` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use fighterdle::core::RosterEntry;
/// use fighterdle::game::select_daily;
///
/// let roster = vec![RosterEntry::new("Jon Jones"), RosterEntry::new("Tom Aspinall")];
/// let day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
///
/// let first = select_daily(&roster, day, None, &mut rand::rng()).unwrap();
/// let again = select_daily(&roster, day, Some(&first), &mut rand::rng()).unwrap();
/// assert_eq!(first, again);
/// ```
pub fn select_daily<R: Rng + ?Sized>(
    roster: &[RosterEntry],
    today: NaiveDate,
    persisted: Option<&DailyPick>,
    rng: &mut R,
) -> Result<DailyPick> {
    if roster.is_empty() {
        return Err(GameError::EmptyRoster);
    }

    if let Some(pick) = persisted
        && pick.date == today
    {
        return Ok(pick.clone());
    }

    let entry = roster.choose(rng).ok_or(GameError::EmptyRoster)?.clone();
    Ok(DailyPick { date: today, entry })
}

/// Daily selection backed by a key-value store
pub struct DailySelector<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> DailySelector<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Read the persisted pick
    ///
    /// A missing, unreadable or corrupt record reads as `None`.
    pub fn load(&self) -> Option<DailyPick> {
        let raw = match self.store.get(DAILY_PICK_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "could not read daily pick");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(pick) => Some(pick),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring corrupt daily pick");
                None
            }
        }
    }

    /// Select today's target, persisting it if it is new
    ///
    /// A failure to persist is logged and does not prevent play.
    ///
    /// # Errors
    /// Returns `GameError::EmptyRoster` if `roster` is empty.
    pub fn select<R: Rng + ?Sized>(
        &mut self,
        roster: &[RosterEntry],
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<DailyPick> {
        let persisted = self.load();
        let pick = select_daily(roster, today, persisted.as_ref(), rng)?;

        if persisted.as_ref() == Some(&pick) {
            tracing::debug!(date = %pick.date, "reusing persisted daily pick");
            if !roster.iter().any(|entry| entry.is_named(&pick.entry.name)) {
                tracing::warn!(
                    target_name = %pick.entry.name,
                    "today's pick is not in the current roster; it can still be guessed by name"
                );
            }
        } else {
            tracing::info!(date = %pick.date, "new daily pick");
            if let Err(e) = self.save(&pick) {
                tracing::warn!(error = %e, "could not persist daily pick");
            }
        }

        Ok(pick)
    }

    fn save(&mut self, pick: &DailyPick) -> Result<()> {
        let json = serde_json::to_string(pick).map_err(|e| GameError::Store(e.to_string()))?;
        self.store.set(DAILY_PICK_KEY, &json)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, MemoryStore};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster() -> Vec<RosterEntry> {
        ["Jon Jones", "Tom Aspinall", "Alex Pereira", "Leon Edwards", "Max Holloway"]
            .into_iter()
            .map(RosterEntry::new)
            .collect()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn pick_outside_filtered_roster_is_kept_for_the_day() {
        let mut selector = DailySelector::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(9);
        let first = selector.select(&roster(), day(4), &mut rng).unwrap();

        let narrowed: Vec<RosterEntry> = roster()
            .into_iter()
            .filter(|e| e.name != first.entry.name)
            .collect();
        let again = selector.select(&narrowed, day(4), &mut rng).unwrap();
        assert_eq!(again, first);
    }

    #[test]
    fn empty_roster_fails() {
        let result = select_daily(&[], day(1), None, &mut StdRng::seed_from_u64(1));
        assert_eq!(result.unwrap_err(), GameError::EmptyRoster);
    }

    #[test]
    fn persisted_pick_reused_same_day() {
        let persisted = DailyPick {
            date: day(1),
            entry: RosterEntry::new("Someone Retired"),
        };
        let pick = select_daily(&roster(), day(1), Some(&persisted), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(pick, persisted);
    }

    #[test]
    fn stale_pick_replaced() {
        let persisted = DailyPick {
            date: day(1),
            entry: RosterEntry::new("Someone Retired"),
        };
        let pick = select_daily(&roster(), day(2), Some(&persisted), &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(pick.date, day(2));
        assert!(roster().contains(&pick.entry));
    }

    #[test]
    fn selector_is_idempotent_within_a_day() {
        let mut selector = DailySelector::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(42);

        let first = selector.select(&roster(), day(3), &mut rng).unwrap();
        for _ in 0..10 {
            let again = selector.select(&roster(), day(3), &mut rng).unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(selector.load(), Some(first));
    }

    #[test]
    fn selector_persists_new_day() {
        let mut selector = DailySelector::new(MemoryStore::new());
        let mut rng = StdRng::seed_from_u64(42);

        selector.select(&roster(), day(3), &mut rng).unwrap();
        let next = selector.select(&roster(), day(4), &mut rng).unwrap();
        assert_eq!(next.date, day(4));
        assert_eq!(selector.load().map(|p| p.date), Some(day(4)));
    }

    #[test]
    fn corrupt_record_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(DAILY_PICK_KEY, "{broken").unwrap();
        let mut selector = DailySelector::new(store);

        assert_eq!(selector.load(), None);
        let pick = selector
            .select(&roster(), day(5), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(selector.load(), Some(pick));
    }

    #[test]
    fn record_format_is_date_and_entry() {
        let mut selector = DailySelector::new(MemoryStore::new());
        selector
            .select(&roster(), day(6), &mut StdRng::seed_from_u64(9))
            .unwrap();

        let raw = selector.store().get(DAILY_PICK_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["date"], "2025-06-06");
        assert!(value["entry"]["name"].is_string());
    }

    #[test]
    fn pick_survives_reopening_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut selector = DailySelector::new(FileStore::new(&path));
        let first = selector
            .select(&roster(), day(7), &mut StdRng::seed_from_u64(11))
            .unwrap();

        let mut reopened = DailySelector::new(FileStore::new(&path));
        let again = reopened
            .select(&roster(), day(7), &mut StdRng::seed_from_u64(999))
            .unwrap();
        assert_eq!(again, first);
    }
}
