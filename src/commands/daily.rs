//! Daily pick command
//!
//! Resolves today's target through the persisted store, exactly as a game would.

use crate::error::GameError;
use crate::game::{DailyPick, DailySelector, today};
use crate::roster::Roster;
use crate::store::FileStore;
use std::path::PathBuf;

/// Today's pick and where it is stored
pub struct DailyInfo {
    pub pick: DailyPick,
    pub state_path: PathBuf,
}

/// Resolve today's pick using the state file at `state_path`
///
/// # Errors
///
/// Returns `GameError::EmptyRoster` if the roster has no entries.
pub fn daily_info(roster: &Roster, state_path: PathBuf) -> Result<DailyInfo, GameError> {
    let mut selector = DailySelector::new(FileStore::new(&state_path));
    let pick = selector.select(roster.entries(), today(), &mut rand::rng())?;

    Ok(DailyInfo { pick, state_path })
}
