// Rust guideline compliant 2026-10-18

//! Integration tests for preference persistence and the view cache.

use folio_core::{
    Config, ContentStore, FileStorage, Filter, KeyValueStore, ManualClock, MemoryStorage,
    Persistence,
};
use serde_json::{json, Value};
use std::rc::Rc;
use tempfile::TempDir;

const START: i64 = 1_700_000_000_000;

struct Harness {
    durable: Rc<MemoryStorage>,
    session: Rc<MemoryStorage>,
    clock: Rc<ManualClock>,
    config: Config,
}

impl Harness {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        Self {
            durable: Rc::new(MemoryStorage::new()),
            session: Rc::new(MemoryStorage::new()),
            clock: Rc::new(ManualClock::new(START)),
            config,
        }
    }

    /// Builds a store over the shared backends, as a page reload would.
    fn store(&self) -> ContentStore {
        ContentStore::new(Persistence::new(
            Box::new(Rc::clone(&self.durable)),
            Box::new(Rc::clone(&self.session)),
            self.clock.clone(),
            self.config.clone(),
        ))
    }
}

fn content(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| {
                json!({
                    "id": format!("item-{i}"),
                    "title": format!("Item {i}"),
                    "type": if i % 2 == 0 { "talk" } else { "blog" },
                    "publicationDate": format!("2024-03-{:02}", (i % 28) + 1),
                    "description": "A".repeat(40),
                    "externalLink": "https://example.com/post",
                    "featured": i == 0,
                })
            })
            .collect(),
    )
}

#[test]
fn test_preferences_survive_reload_but_data_does_not() {
    let harness = Harness::new();
    {
        let store = harness.store();
        store
            .set_profile(json!({
                "name": "Ada",
                "bio": "Bio",
                "profileImage": { "src": "/a.jpg", "fallbackInitials": "A" },
                "linkedinUrl": "https://linkedin.com/in/ada",
            }))
            .unwrap();
        store.set_content(content(30)).unwrap();
        store.set_current_filter("talk");
        store.set_current_page(3);
        assert!(store.persist_state());
    }

    let reloaded = harness.store();
    assert_eq!(reloaded.current_filter(), Filter::Talk);
    assert_eq!(reloaded.current_page(), 3);
    assert!(reloaded.profile().is_none());
    assert!(reloaded.achievements().is_empty());
    assert!(reloaded.content().is_empty());
}

#[test]
fn test_restored_page_kept_when_content_reloaded() {
    let harness = Harness::new();
    {
        let store = harness.store();
        store.set_content(content(20)).unwrap();
        store.set_current_page(4);
    }

    let reloaded = harness.store();
    reloaded.set_content(content(20)).unwrap();
    assert_eq!(reloaded.current_page(), 4);
    assert_eq!(reloaded.paginated_content().len(), 2);
}

#[test]
fn test_malformed_preferences_fall_back_to_defaults() {
    let harness = Harness::new();
    harness
        .durable
        .set("portfolio_state", r#"{"currentFilter":42}"#)
        .unwrap();

    let store = harness.store();
    assert_eq!(store.current_filter(), Filter::All);
    assert_eq!(store.current_page(), 1);
}

#[test]
fn test_storage_failures_do_not_break_mutations() {
    let harness = Harness::new();
    harness.durable.set_failing(true);
    harness.session.set_failing(true);

    let store = harness.store();
    store.set_content(content(10)).unwrap();
    store.set_current_filter("blog");

    assert_eq!(store.filtered_content().len(), 5);
    assert!(!store.persist_state());
    assert!(!store.cache_computed_data());
    assert!(store.load_cached_data().is_none());
}

#[test]
fn test_quota_exceeded_is_non_fatal() {
    let harness = Harness {
        durable: Rc::new(MemoryStorage::with_quota(8)),
        ..Harness::new()
    };

    let store = harness.store();
    store.set_current_filter("talk");
    assert_eq!(store.current_filter(), Filter::Talk);
    assert!(harness.durable.is_empty());
}

#[test]
fn test_mutations_refresh_cache() {
    let harness = Harness::new();
    let store = harness.store();
    store.set_content(content(9)).unwrap();

    let cached = store.load_cached_data().expect("cache should be written on mutation");
    assert_eq!(cached.filter, Filter::All);
    assert_eq!(cached.timestamp, START);
    let ids: Vec<&str> = cached.filtered_content.iter().map(|c| c.id.as_str()).collect();
    let view = store.filtered_content();
    let view_ids: Vec<&str> = view.iter().map(|c| c.id()).collect();
    assert_eq!(ids, view_ids);
}

#[test]
fn test_cache_is_a_trimmed_projection() {
    let harness = Harness::new();
    let store = harness.store();
    store.set_content(content(1)).unwrap();

    let raw = harness.session.get("portfolio_cache").unwrap().unwrap();
    let value: Value = serde_json::from_str(&raw).unwrap();
    let first = &value["filteredContent"][0];
    let mut keys: Vec<&str> = first.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["description", "externalLink", "id", "publicationDate", "title", "type"]
    );
    assert_eq!(value["filter"], json!("all"));
}

#[test]
fn test_cache_rejected_for_other_filter_and_evicted() {
    let harness = Harness::new();
    let store = harness.store();
    store.set_content(content(6)).unwrap();
    assert!(harness.session.contains_key("portfolio_cache"));

    // Rewrite the cache as if it had been derived for another filter.
    harness
        .session
        .set(
            "portfolio_cache",
            &json!({ "filteredContent": [], "filter": "article", "timestamp": START }).to_string(),
        )
        .unwrap();

    assert!(store.load_cached_data().is_none());
    assert!(!harness.session.contains_key("portfolio_cache"));
}

#[test]
fn test_cache_expires_after_freshness_window() {
    let harness = Harness::with_config(Config {
        cache_ttl_secs: 60,
        ..Config::default()
    });
    let store = harness.store();
    store.set_content(content(6)).unwrap();

    harness.clock.advance(60_000);
    assert!(store.load_cached_data().is_some());

    harness.clock.advance(1);
    assert!(store.load_cached_data().is_none());
    assert!(!harness.session.contains_key("portfolio_cache"));
}

#[test]
fn test_sweep_evicts_only_expired_cache() {
    let harness = Harness::new();
    let store = harness.store();
    store.set_content(content(3)).unwrap();

    assert!(!store.sweep_cache());
    harness.clock.advance(300_001);
    assert!(store.sweep_cache());
    assert!(!harness.session.contains_key("portfolio_cache"));
}

#[test]
fn test_oversized_cache_is_skipped() {
    let harness = Harness::with_config(Config {
        cache_max_bytes: 512,
        ..Config::default()
    });
    let store = harness.store();
    store.set_content(content(50)).unwrap();

    assert!(!harness.session.contains_key("portfolio_cache"));
    assert!(!store.cache_computed_data());
    assert_eq!(store.filtered_content().len(), 50);

    // A small view fits again.
    store.set_content(content(1)).unwrap();
    assert!(harness.session.contains_key("portfolio_cache"));
}

#[test]
fn test_file_backed_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let build = || {
        ContentStore::new(Persistence::new(
            Box::new(FileStorage::new(temp_dir.path().join("state")).unwrap()),
            Box::new(FileStorage::new(temp_dir.path().join("session")).unwrap()),
            Rc::new(ManualClock::new(START)),
            Config::default(),
        ))
    };

    {
        let store = build();
        store.set_content(content(12)).unwrap();
        store.set_current_filter("blog");
    }

    let reloaded = build();
    assert_eq!(reloaded.current_filter(), Filter::Blog);
    assert_eq!(reloaded.current_page(), 1);
    let cached = reloaded.load_cached_data().expect("fresh file cache");
    assert_eq!(cached.filtered_content.len(), 6);
}
