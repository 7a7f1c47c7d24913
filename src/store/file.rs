//! JSON file store
//!
//! All keys live in one JSON object on disk. The file and its parent
//! directories are created on the first write.

use super::KeyValueStore;
use crate::error::{GameError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default location of the state file: `<data dir>/fighterdle/state.json`
///
/// Falls back to the current directory when the platform has no data dir.
#[must_use]
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fighterdle")
        .join("state.json")
}

/// Persistent store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.error(&e)),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| self.error(&e))
    }

    fn error(&self, cause: &dyn std::fmt::Display) -> GameError {
        GameError::Store(format!("{}: {cause}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking every future write
        let mut values = self.read_all().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable state file");
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.error(&e))?;
        }

        let json = serde_json::to_string_pretty(&values).map_err(|e| self.error(&e))?;
        fs::write(&self.path, json).map_err(|e| self.error(&e))?;

        tracing::debug!(path = %self.path.display(), key, "state saved");
        Ok(())
    }
}
