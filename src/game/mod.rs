//! Game rules
//!
//! Daily target selection, game modes and the per-game session state machine.

pub mod daily;
mod mode;
mod session;

pub use daily::{DAILY_PICK_KEY, DailyPick, DailySelector, select_daily, today};
pub use mode::GameMode;
pub use session::{GameSession, GuessOutcome, GuessRecord, SessionState};
