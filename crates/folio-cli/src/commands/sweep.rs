// Rust guideline compliant 2026-10-18

//! Implementation of the `folio sweep` command.

use crate::{OutputFormatter, Workspace};
use anyhow::Result;

/// Evicts the view cache if it has outlived its freshness window.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<()> {
    let store = workspace.open_store()?;
    let message = if store.sweep_cache() {
        "Evicted expired view cache"
    } else {
        "No expired view cache"
    };
    println!("{}", formatter.format_message(message));
    Ok(())
}
