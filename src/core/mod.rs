//! Core domain types for the guessing game
//!
//! Pure scoring logic with no terminal or storage dependencies: text
//! normalization, letter tiles and trait badges.

mod entry;
mod normalize;
mod tile;
mod traits;

pub use entry::RosterEntry;
pub use normalize::{compact, normalize};
pub use tile::{Classification, Tile, count_class, score, score_tiles, tiles_to_emoji};
pub use traits::{
    Direction, TraitFeedback, TraitKind, TraitScores, WEIGHT_CLASSES, compare_age,
    compare_entries, score_traits_text, weight_class_index,
};
