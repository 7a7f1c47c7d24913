//! Error types shared by the game core
//!
//! Every error here is recoverable at the presentation layer by showing a message.

use thiserror::Error;

/// Errors produced by roster loading, daily selection and guess submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The dataset loaded fine but holds no usable entries (possibly after filtering)
    #[error("no fighters available in the roster")]
    EmptyRoster,

    /// The dataset could not be read or parsed
    #[error("failed to load fighter dataset: {0}")]
    DatasetLoad(String),

    /// A guessed name that does not resolve to a roster entry
    #[error("'{0}' was not found in the roster")]
    UnknownGuess(String),

    /// Letter mode received something other than one character
    #[error("'{0}' is not a single letter")]
    InvalidLetter(String),

    /// The persisted state could not be read or written
    #[error("state store error: {0}")]
    Store(String),
}

/// Convenience alias used across the library
pub type Result<T, E = GameError> = std::result::Result<T, E>;
