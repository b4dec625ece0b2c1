// Rust guideline compliant 2026-10-18

//! Implementation of the `folio init` command.

use crate::{OutputFormatter, Workspace};
use anyhow::Result;
use folio_core::Config;

/// Initializes a data directory with a default config and empty data files.
///
/// Existing files are left untouched.
///
/// # Errors
///
/// Returns an error if the directory or any file cannot be created.
pub fn execute(workspace: &Workspace, formatter: &dyn OutputFormatter) -> Result<()> {
    std::fs::create_dir_all(workspace.data_dir())?;

    if !workspace.data_dir().join("config.toml").exists() {
        Config::default().save(workspace.data_dir())?;
    }

    for (path, empty) in [
        (workspace.profile_path(), "null"),
        (workspace.achievements_path(), "[]"),
        (workspace.content_path(), "[]"),
    ] {
        if !path.exists() {
            std::fs::write(&path, empty)?;
        }
    }

    println!(
        "{}",
        formatter.format_message(&format!(
            "Initialized Folio data directory at {}",
            workspace.data_dir().display()
        ))
    );
    Ok(())
}
