// Rust guideline compliant 2026-10-18

//! Configuration management for Folio.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for persistence and caching behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Freshness window of the session view cache, in seconds.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Serialized cache payloads larger than this are not written.
    #[serde(default = "default_cache_max_bytes")]
    pub cache_max_bytes: usize,

    /// Durable storage key for user preferences.
    #[serde(default = "default_preferences_key")]
    pub preferences_key: String,

    /// Session storage key for the cached filtered view.
    #[serde(default = "default_cache_key")]
    pub cache_key: String,
}

/// Default cache freshness window (5 minutes).
fn default_cache_ttl_secs() -> u64 {
    300
}

/// Default cache size budget (1 MiB).
fn default_cache_max_bytes() -> usize {
    1_048_576
}

fn default_preferences_key() -> String {
    "portfolio_state".to_string()
}

fn default_cache_key() -> String {
    "portfolio_cache".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: default_cache_ttl_secs(),
            cache_max_bytes: default_cache_max_bytes(),
            preferences_key: default_preferences_key(),
            cache_key: default_cache_key(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `FOLIO_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the Folio data directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = data_dir.join("config.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Returns the cache freshness window in milliseconds.
    pub fn cache_ttl_millis(&self) -> i64 {
        i64::try_from(self.cache_ttl_secs.saturating_mul(1_000)).unwrap_or(i64::MAX)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `FOLIO_CACHE_TTL_SECS` - Cache freshness window in seconds
    /// - `FOLIO_CACHE_MAX_BYTES` - Cache size budget in bytes
    /// - `FOLIO_PREFERENCES_KEY` - Durable preferences key
    /// - `FOLIO_CACHE_KEY` - Session cache key
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values are invalid.
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("FOLIO_CACHE_TTL_SECS") {
            self.cache_ttl_secs = val.parse().map_err(|_| {
                Error::InvalidConfig("FOLIO_CACHE_TTL_SECS must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_CACHE_MAX_BYTES") {
            self.cache_max_bytes = val.parse().map_err(|_| {
                Error::InvalidConfig("FOLIO_CACHE_MAX_BYTES must be a positive number".to_string())
            })?;
        }

        if let Ok(val) = std::env::var("FOLIO_PREFERENCES_KEY") {
            self.preferences_key = val;
        }

        if let Ok(val) = std::env::var("FOLIO_CACHE_KEY") {
            self.cache_key = val;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `cache_ttl_secs` or `cache_max_bytes` is zero
    /// - either storage key is blank
    /// - both storage keys are the same
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl_secs == 0 {
            return Err(Error::InvalidConfig(
                "cache_ttl_secs must be greater than 0".to_string(),
            ));
        }

        if self.cache_max_bytes == 0 {
            return Err(Error::InvalidConfig(
                "cache_max_bytes must be greater than 0".to_string(),
            ));
        }

        if self.preferences_key.trim().is_empty() || self.cache_key.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "storage keys cannot be empty".to_string(),
            ));
        }

        if self.preferences_key == self.cache_key {
            return Err(Error::InvalidConfig(format!(
                "preferences_key and cache_key must differ, both are '{}'",
                self.cache_key
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join("config.toml");
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
