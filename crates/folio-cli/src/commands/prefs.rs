// Rust guideline compliant 2026-10-18

//! Implementation of the `folio prefs` command.

use crate::{OutputFormatter, Workspace};
use anyhow::Result;

/// Renders the restored preferences and whether a usable view cache exists.
///
/// Canonical data is not loaded, so this shows exactly what a fresh start
/// would see.
///
/// # Errors
///
/// Returns an error if the store cannot be opened.
pub fn render(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<String> {
    let store = workspace.open_store()?;
    let cached = store.load_cached_data();
    Ok(formatter.format_preferences(
        store.current_filter(),
        store.current_page(),
        cached.as_ref(),
    ))
}

/// Prints the restored preferences.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(workspace, formatter)?);
    Ok(())
}
