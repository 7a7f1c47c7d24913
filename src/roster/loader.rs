//! Dataset loading utilities
//!
//! Parses a JSON array of roster entries from a file, a string or the embedded default.

use super::DEFAULT_DATASET;
use crate::core::RosterEntry;
use crate::error::{GameError, Result};
use std::fs;
use std::path::Path;

/// Load entries from a JSON file
///
/// Entries without a name are skipped.
///
/// # Errors
///
/// Returns `GameError::DatasetLoad` if the file cannot be read or is not a
/// JSON array of entries.
///
/// # Examples
/// ```no_run
/// use fighterdle::roster::loader::load_from_file;
///
/// let entries = load_from_file("fighters.json").unwrap();
/// println!("Loaded {} fighters", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<RosterEntry>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| GameError::DatasetLoad(format!("{}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "read dataset file");
    load_from_str(&content)
}

/// Parse entries from JSON text
///
/// # Errors
///
/// Returns `GameError::DatasetLoad` if the text is not a JSON array of entries.
///
/// # Examples
/// ```
/// use fighterdle::roster::loader::load_from_str;
///
/// let entries = load_from_str(r#"[{"name": "Jon Jones"}, {"name": ""}]"#).unwrap();
/// assert_eq!(entries.len(), 1);
/// ```
pub fn load_from_str(json: &str) -> Result<Vec<RosterEntry>> {
    let entries: Vec<RosterEntry> =
        serde_json::from_str(json).map_err(|e| GameError::DatasetLoad(e.to_string()))?;

    let total = entries.len();
    let usable: Vec<RosterEntry> = entries
        .into_iter()
        .filter(|entry| !entry.name.trim().is_empty())
        .collect();

    if usable.len() < total {
        tracing::debug!(skipped = total - usable.len(), "skipped unnamed entries");
    }

    Ok(usable)
}

/// Parse the embedded default dataset
///
/// # Errors
///
/// Returns `GameError::DatasetLoad` if the embedded JSON is malformed.
pub fn load_embedded() -> Result<Vec<RosterEntry>> {
    load_from_str(DEFAULT_DATASET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_dataset_parses() {
        let entries = load_embedded().unwrap();
        assert!(entries.len() > 20);
        assert!(entries.iter().all(|e| !e.name.is_empty()));
        assert!(entries.iter().any(|e| e.name == "Conor McGregor"));
    }

    #[test]
    fn embedded_dataset_mixes_organizations() {
        let entries = load_embedded().unwrap();
        assert!(entries.iter().any(|e| e.organization == "UFC"));
        assert!(entries.iter().any(|e| e.organization != "UFC"));
    }

    #[test]
    fn malformed_json_is_dataset_error() {
        let result = load_from_str("{not json");
        assert!(matches!(result, Err(GameError::DatasetLoad(_))));

        let result = load_from_str(r#"{"name": "not an array"}"#);
        assert!(matches!(result, Err(GameError::DatasetLoad(_))));
    }

    #[test]
    fn empty_array_loads_as_empty() {
        assert!(load_from_str("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_dataset_error() {
        let result = load_from_file("/definitely/not/here/fighters.json");
        assert!(matches!(result, Err(GameError::DatasetLoad(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Leon Edwards", "division": "Welterweight", "age": "33"}}]"#
        )
        .unwrap();

        let entries = load_from_file(file.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].division, "Welterweight");
        assert_eq!(entries[0].age, Some(33));
    }
}
