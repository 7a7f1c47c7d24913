//! Embedded fighter dataset
//!
//! The default roster compiled into the binary, used when no `--dataset` file is given.

/// Default dataset (JSON array of roster entries)
pub const DEFAULT_DATASET: &str = include_str!("../../data/fighters.json");
