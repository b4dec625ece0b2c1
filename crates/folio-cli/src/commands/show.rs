// Rust guideline compliant 2026-10-18

//! Implementation of the `folio show` command.

use crate::{OutputFormatter, Workspace};
use anyhow::Result;

/// Renders the profile and achievements.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the data is rejected.
pub fn render(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<String> {
    let store = workspace.open_store()?;
    workspace.load_data(&store)?;

    let profile = store.profile();
    Ok(formatter.format_profile(profile.as_deref(), &store.achievements()))
}

/// Prints the profile and achievements.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<()> {
    println!("{}", render(workspace, formatter)?);
    Ok(())
}
