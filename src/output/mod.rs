//! Terminal output formatting
//!
//! Display utilities for the simple CLI mode and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{
    print_daily_info, print_game_over, print_guess_record, print_score_result,
    print_session_status, print_suggestions,
};
