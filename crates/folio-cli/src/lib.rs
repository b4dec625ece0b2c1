// Rust guideline compliant 2026-10-18

//! Folio CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod output;
pub mod workspace;

pub use output::{create_formatter, render_error, OutputFormatter};
pub use workspace::Workspace;
