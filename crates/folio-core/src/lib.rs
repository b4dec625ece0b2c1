// Rust guideline compliant 2026-10-18

//! Folio Core Library
//!
//! This crate provides the reactive content state engine behind the Folio
//! portfolio site:
//! - Validated record types (Profile, Achievement, ContentItem)
//! - Content state store with filter, sort and pagination
//! - Named-event notification hub
//! - Preference persistence and a freshness-bounded view cache
//! - Pluggable key-value storage backends and clocks
//! - Error types and result handling

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod pagination;
pub mod persistence;
pub mod storage;
pub mod store;
pub mod validate;
pub mod view;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::{Error, RecordKind, Result, StorageError, ValidationError};
pub use events::{EventHub, EventKind, ListenerError, ListenerId, StoreEvent};
pub use models::{Achievement, CachedItem, ContentItem, ContentType, Filter, Profile, ProfileImage};
pub use pagination::{PageInfo, ITEMS_PER_PAGE};
pub use persistence::{CachedContent, Persistence, Preferences};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use store::ContentStore;
