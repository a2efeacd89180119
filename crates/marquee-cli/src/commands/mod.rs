//! Subcommand implementations.

pub mod detail;
pub mod list;
pub mod prefs;
