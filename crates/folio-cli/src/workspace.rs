// Rust guideline compliant 2026-10-18

//! Data directory layout and store bootstrapping.

use anyhow::{Context, Result};
use folio_core::{Config, ContentStore, FileStorage, Persistence, SystemClock};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Paths of a Folio data directory.
///
/// ```text
/// <data_dir>/
///   config.toml         optional overrides
///   profile.json        profile record
///   achievements.json   achievement records
///   content.json        content records
///   state/              durable preferences
///   session/            view cache
/// ```
#[derive(Debug, Clone)]
pub struct Workspace {
    data_dir: PathBuf,
}

impl Workspace {
    /// Creates a workspace rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the profile data file path.
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.data_dir.join("profile.json")
    }

    /// Returns the achievements data file path.
    #[must_use]
    pub fn achievements_path(&self) -> PathBuf {
        self.data_dir.join("achievements.json")
    }

    /// Returns the content data file path.
    #[must_use]
    pub fn content_path(&self) -> PathBuf {
        self.data_dir.join("content.json")
    }

    /// Returns the durable preferences directory.
    #[must_use]
    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    /// Returns the session cache directory.
    #[must_use]
    pub fn session_dir(&self) -> PathBuf {
        self.data_dir.join("session")
    }

    /// Builds a store over the workspace's file-backed storage.
    ///
    /// Preferences are restored; canonical data is not loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the storage
    /// directories cannot be created.
    pub fn open_store(&self) -> Result<Rc<ContentStore>> {
        let config = Config::load(&self.data_dir).context("Failed to load config")?;
        let durable = FileStorage::new(self.state_dir())?;
        let session = FileStorage::new(self.session_dir())?;
        let persistence = Persistence::new(
            Box::new(durable),
            Box::new(session),
            Rc::new(SystemClock),
            config,
        );
        Ok(Rc::new(ContentStore::new(persistence)))
    }

    /// Feeds the bulk data files into `store`. Missing files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load_data(&self, store: &ContentStore) -> Result<()> {
        if let Some(profile) = read_json(&self.profile_path())? {
            store
                .set_profile(profile)
                .with_context(|| format!("Rejected {}", self.profile_path().display()))?;
        }

        if let Some(achievements) = read_json(&self.achievements_path())? {
            store
                .set_achievements(achievements)
                .with_context(|| format!("Rejected {}", self.achievements_path().display()))?;
        }

        if let Some(content) = read_json(&self.content_path())? {
            store
                .set_content(content)
                .with_context(|| format!("Rejected {}", self.content_path().display()))?;
        }

        Ok(())
    }
}

fn read_json(path: &Path) -> Result<Option<Value>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Data file missing, skipping");
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(Some(value))
}
