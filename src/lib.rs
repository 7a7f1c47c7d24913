//! Fighterdle
//!
//! A daily guess-the-fighter game: letter tiles for guessed names, trait badges
//! for division, country, organization and age, and a fighter image that sharpens
//! with every miss.
//!
//! # Quick Start
//!
//! ```rust
//! use fighterdle::core::{Classification, score};
//!
//! // Duplicate letters are credited at most as often as they occur in the target
//! let result = score("Islam", "sails");
//! assert_eq!(result[4], Classification::Absent);
//! ```

// Core domain types
pub mod core;

// Game rules: daily pick, modes, sessions
pub mod game;

// Fighter roster
pub mod roster;

// Local persistence
pub mod store;

pub mod config;
pub mod error;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
