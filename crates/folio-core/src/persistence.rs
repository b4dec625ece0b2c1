// Rust guideline compliant 2026-10-18

//! Persistence and cache layer.
//!
//! Two payloads are kept, both JSON text:
//! - durable preferences `{currentFilter, currentPage, timestamp}`, read back
//!   unconditionally at start-up when parseable
//! - a session cache `{filteredContent, filter, timestamp}` holding a trimmed
//!   projection of the filtered view, trusted only inside the freshness window
//!
//! Storage failures never propagate: they are logged and the caller carries
//! on with in-memory state.

use crate::clock::Clock;
use crate::config::Config;
use crate::models::{CachedItem, ContentItem, Filter};
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Durable user preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Active filter.
    pub current_filter: Filter,
    /// 1-based page number.
    pub current_page: usize,
    /// Unix milliseconds when written.
    pub timestamp: i64,
}

/// Cached filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedContent {
    /// Trimmed projection of the filtered view, in view order.
    pub filtered_content: Vec<CachedItem>,
    /// Filter the view was derived with.
    pub filter: Filter,
    /// Unix milliseconds when written.
    pub timestamp: i64,
}

/// Reads and writes preferences and the view cache.
pub struct Persistence {
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    clock: Rc<dyn Clock>,
    config: Config,
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a persistence layer over the given backends.
    ///
    /// # Arguments
    ///
    /// * `durable` - Long-lived storage for preferences
    /// * `session` - Short-lived storage for the view cache
    /// * `clock` - Time source for timestamps and freshness checks
    /// * `config` - Keys, freshness window and cache budget
    pub fn new(
        durable: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
        clock: Rc<dyn Clock>,
        config: Config,
    ) -> Self {
        Self {
            durable,
            session,
            clock,
            config,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Writes the current preferences to durable storage.
    ///
    /// # Returns
    ///
    /// True if the write succeeded; failures are logged.
    pub fn save_preferences(&self, filter: Filter, page: usize) -> bool {
        let prefs = Preferences {
            current_filter: filter,
            current_page: page,
            timestamp: self.clock.now_millis(),
        };

        let json = match serde_json::to_string(&prefs) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize preferences");
                return false;
            }
        };

        match self.durable.set(&self.config.preferences_key, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.config.preferences_key, error = %e, "Failed to persist preferences");
                false
            }
        }
    }

    /// Reads preferences from durable storage.
    ///
    /// Missing, unreadable or malformed entries (including a page below 1)
    /// yield `None`.
    pub fn load_preferences(&self) -> Option<Preferences> {
        let raw = match self.durable.get(&self.config.preferences_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %self.config.preferences_key, error = %e, "Failed to read preferences");
                return None;
            }
        };

        match serde_json::from_str::<Preferences>(&raw) {
            Ok(prefs) if prefs.current_page >= 1 => Some(prefs),
            Ok(_) => {
                tracing::debug!("Ignoring preferences with page below 1");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring malformed preferences");
                None
            }
        }
    }

    /// Writes a trimmed projection of `view` to session storage.
    ///
    /// Payloads larger than `cache_max_bytes` are skipped, not truncated.
    ///
    /// # Returns
    ///
    /// True if the cache entry was written.
    pub fn save_cache(&self, filter: Filter, view: &[ContentItem]) -> bool {
        let cached = CachedContent {
            filtered_content: view.iter().map(CachedItem::from).collect(),
            filter,
            timestamp: self.clock.now_millis(),
        };

        let json = match serde_json::to_string(&cached) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize view cache");
                return false;
            }
        };

        if json.len() > self.config.cache_max_bytes {
            tracing::warn!(
                size = json.len(),
                limit = self.config.cache_max_bytes,
                "View cache payload over budget, not caching"
            );
            return false;
        }

        match self.session.set(&self.config.cache_key, &json) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.config.cache_key, error = %e, "Failed to write view cache");
                false
            }
        }
    }

    /// Returns the cached view if it is fresh and was derived with `active`.
    ///
    /// Any other entry (stale, for a different filter, or unparseable) is
    /// evicted and `None` is returned.
    pub fn load_cache(&self, active: Filter) -> Option<CachedContent> {
        let cached = self.read_cache()?;

        if !self.is_fresh(cached.timestamp) {
            tracing::debug!(age_ms = self.clock.now_millis() - cached.timestamp, "View cache stale");
            self.evict_cache();
            return None;
        }

        if cached.filter != active {
            tracing::debug!(cached = %cached.filter, active = %active, "View cache filter mismatch");
            self.evict_cache();
            return None;
        }

        tracing::debug!(items = cached.filtered_content.len(), "View cache hit");
        Some(cached)
    }

    /// Evicts the cache entry if it has outlived the freshness window.
    ///
    /// # Returns
    ///
    /// True if an entry was removed.
    pub fn sweep_expired(&self) -> bool {
        match self.read_cache() {
            Some(cached) if !self.is_fresh(cached.timestamp) => self.evict_cache(),
            _ => false,
        }
    }

    fn read_cache(&self) -> Option<CachedContent> {
        let raw = match self.session.get(&self.config.cache_key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(key = %self.config.cache_key, error = %e, "Failed to read view cache");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(e) => {
                tracing::debug!(error = %e, "Discarding malformed view cache");
                self.evict_cache();
                None
            }
        }
    }

    fn is_fresh(&self, timestamp: i64) -> bool {
        self.clock.now_millis().saturating_sub(timestamp) <= self.config.cache_ttl_millis()
    }

    fn evict_cache(&self) -> bool {
        match self.session.remove(&self.config.cache_key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(key = %self.config.cache_key, error = %e, "Failed to evict view cache");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::storage::MemoryStorage;

    fn persistence() -> (Persistence, Rc<MemoryStorage>, Rc<MemoryStorage>, Rc<ManualClock>) {
        let durable = Rc::new(MemoryStorage::new());
        let session = Rc::new(MemoryStorage::new());
        let clock = Rc::new(ManualClock::new(1_000_000));
        let persistence = Persistence::new(
            Box::new(Rc::clone(&durable)),
            Box::new(Rc::clone(&session)),
            clock.clone(),
            Config::default(),
        );
        (persistence, durable, session, clock)
    }

    #[test]
    fn test_preferences_round_trip() {
        let (persistence, _, _, _) = persistence();
        assert!(persistence.save_preferences(Filter::Talk, 3));
        let prefs = persistence.load_preferences().expect("preferences should load");
        assert_eq!(prefs.current_filter, Filter::Talk);
        assert_eq!(prefs.current_page, 3);
        assert_eq!(prefs.timestamp, 1_000_000);
    }

    #[test]
    fn test_preferences_wire_format() {
        let (persistence, durable, _, _) = persistence();
        persistence.save_preferences(Filter::Blog, 2);
        let raw = durable.get("portfolio_state").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "currentFilter": "blog", "currentPage": 2, "timestamp": 1_000_000 })
        );
    }

    #[test]
    fn test_malformed_preferences_ignored() {
        let (persistence, durable, _, _) = persistence();
        durable.set("portfolio_state", "not json").unwrap();
        assert!(persistence.load_preferences().is_none());

        durable
            .set("portfolio_state", r#"{"currentFilter":"blog","currentPage":0,"timestamp":1}"#)
            .unwrap();
        assert!(persistence.load_preferences().is_none());
    }

    #[test]
    fn test_empty_cache_is_written_and_fresh() {
        let (persistence, _, _, clock) = persistence();
        assert!(persistence.save_cache(Filter::All, &[]));
        clock.advance(300_000);
        let cached = persistence.load_cache(Filter::All).expect("cache should be fresh");
        assert!(cached.filtered_content.is_empty());
    }

    #[test]
    fn test_stale_cache_evicted_on_read() {
        let (persistence, _, session, clock) = persistence();
        persistence.save_cache(Filter::All, &[]);
        clock.advance(300_001);
        assert!(persistence.load_cache(Filter::All).is_none());
        assert!(!session.contains_key("portfolio_cache"));
    }

    #[test]
    fn test_sweep_leaves_fresh_entry() {
        let (persistence, _, session, clock) = persistence();
        persistence.save_cache(Filter::Blog, &[]);
        assert!(!persistence.sweep_expired());
        assert!(session.contains_key("portfolio_cache"));

        clock.advance(600_000);
        assert!(persistence.sweep_expired());
        assert!(!session.contains_key("portfolio_cache"));
        assert!(!persistence.sweep_expired());
    }
}
