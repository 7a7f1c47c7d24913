//! Local key-value persistence
//!
//! A minimal string-to-string store, the device-local equivalent of browser
//! local storage. Only the daily pick is persisted through it.

mod file;
mod memory;

pub use file::{FileStore, default_state_path};
pub use memory::MemoryStore;

use crate::error::Result;

/// String key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    ///
    /// # Errors
    /// Returns `GameError::Store` if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    /// Returns `GameError::Store` if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
