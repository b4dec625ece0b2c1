// Rust guideline compliant 2026-10-18

//! Command implementations for the Folio CLI.

pub mod init;
pub mod list;
pub mod prefs;
pub mod show;
pub mod sweep;
