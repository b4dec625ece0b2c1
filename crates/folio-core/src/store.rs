// Rust guideline compliant 2026-10-18

//! Content state store.
//!
//! Owns the canonical profile, achievements and content collections plus
//! the user-selected filter and page. Every mutation runs the same
//! synchronous pipeline to completion:
//!
//! validate → mutate → recompute view → notify → persist → cache
//!
//! The store is single-threaded. Mutators take `&self` and release every
//! internal borrow before listeners run, so a listener holding a
//! [`std::rc::Weak`] to the store may call back into it; such calls are
//! nested, not deferred.

use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::ValidationError;
use crate::events::{EventHub, EventKind, ListenerError, ListenerId, StoreEvent};
use crate::models::{Achievement, ContentItem, Filter, Profile};
use crate::pagination::{self, PageInfo};
use crate::persistence::{CachedContent, Persistence};
use crate::storage::MemoryStorage;
use crate::validate;
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct State {
    profile: Option<Rc<Profile>>,
    achievements: Rc<[Achievement]>,
    content: Rc<[ContentItem]>,
    filtered: Rc<[ContentItem]>,
    filter: Filter,
    current_page: usize,
}

impl Default for State {
    fn default() -> Self {
        Self {
            profile: None,
            achievements: Vec::new().into(),
            content: Vec::new().into(),
            filtered: Vec::new().into(),
            filter: Filter::All,
            current_page: 1,
        }
    }
}

impl State {
    /// Re-derives the filtered view. A page beyond the new end resets to 1.
    fn recompute(&mut self) {
        self.filtered = crate::view::filter_and_sort(&self.content, self.filter).into();
        let total = pagination::total_pages(self.filtered.len());
        if self.current_page > total {
            self.current_page = 1;
        }
        tracing::debug!(
            filter = %self.filter,
            items = self.filtered.len(),
            total_pages = total,
            "Recomputed filtered view"
        );
    }

    fn page_info(&self) -> PageInfo {
        PageInfo {
            current_page: self.current_page,
            total_pages: pagination::total_pages(self.filtered.len()),
        }
    }
}

/// The reactive content state store.
#[derive(Debug)]
pub struct ContentStore {
    state: RefCell<State>,
    events: EventHub,
    persistence: Persistence,
}

impl ContentStore {
    /// Creates an empty store, restoring the filter and page from durable
    /// preferences when a well-formed entry exists.
    ///
    /// Canonical collections always start empty. A restored page is kept
    /// as saved even when it lies beyond the (still empty) view; the first
    /// recompute after data arrives resets it to 1 if it is out of range.
    pub fn new(persistence: Persistence) -> Self {
        let mut state = State::default();
        if let Some(prefs) = persistence.load_preferences() {
            tracing::debug!(
                filter = %prefs.current_filter,
                page = prefs.current_page,
                "Restored preferences"
            );
            state.filter = prefs.current_filter;
            state.current_page = prefs.current_page;
        }

        Self {
            state: RefCell::new(state),
            events: EventHub::new(),
            persistence,
        }
    }

    /// Creates a store over fresh in-memory backends and the system clock.
    pub fn in_memory() -> Self {
        Self::new(Persistence::new(
            Box::new(MemoryStorage::new()),
            Box::new(MemoryStorage::new()),
            Rc::new(SystemClock),
            Config::default(),
        ))
    }

    /// Replaces the profile.
    ///
    /// A JSON `null` clears the profile without validation and notifies
    /// `profile` with `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a required field is missing, empty
    /// or malformed; the previous profile is kept.
    pub fn set_profile(&self, data: Value) -> Result<(), ValidationError> {
        let profile = match data {
            Value::Null => None,
            data => Some(Rc::new(validate::validate_profile(&data)?)),
        };

        self.state.borrow_mut().profile = profile.clone();
        self.events.dispatch(&StoreEvent::Profile(profile));
        self.save();
        Ok(())
    }

    /// Replaces the achievements collection.
    ///
    /// Anything other than a JSON array clears the collection.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first invalid element; the
    /// previous collection is kept.
    pub fn set_achievements(&self, list: Value) -> Result<(), ValidationError> {
        let achievements: Rc<[Achievement]> = match list.as_array() {
            Some(items) => validate::validate_achievements(items)?.into(),
            None => Vec::new().into(),
        };

        self.state.borrow_mut().achievements = Rc::clone(&achievements);
        self.events.dispatch(&StoreEvent::Achievements(achievements));
        self.save();
        Ok(())
    }

    /// Replaces the canonical content collection and recomputes the view.
    ///
    /// Anything other than a JSON array clears the collection. Listeners
    /// receive `content` with the canonical collection, then
    /// `filteredContent` with the view as it stands once the `content`
    /// listeners have returned.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] for the first invalid element; the
    /// previous collection and view are kept.
    pub fn set_content(&self, list: Value) -> Result<(), ValidationError> {
        let content: Rc<[ContentItem]> = match list.as_array() {
            Some(items) => validate::validate_content(items)?.into(),
            None => Vec::new().into(),
        };

        {
            let mut state = self.state.borrow_mut();
            state.content = Rc::clone(&content);
            state.recompute();
        }

        self.events.dispatch(&StoreEvent::Content(content));
        self.events
            .dispatch(&StoreEvent::FilteredContent(self.filtered_content()));
        self.save();
        Ok(())
    }

    /// Sets the active filter. Unknown names silently become `all`.
    ///
    /// The page is reset to 1 before the view is recomputed. Listeners
    /// receive `filter`, then `filteredContent` with the view as it stands
    /// once the `filter` listeners have returned.
    pub fn set_current_filter(&self, filter: &str) {
        let filter = Filter::coerce(filter);

        {
            let mut state = self.state.borrow_mut();
            state.filter = filter;
            state.current_page = 1;
            state.recompute();
        }

        self.events.dispatch(&StoreEvent::Filter(filter));
        self.events
            .dispatch(&StoreEvent::FilteredContent(self.filtered_content()));
        self.save();
    }

    /// Moves to `page`, clamped into `[1, max(1, total_pages)]`.
    ///
    /// # Returns
    ///
    /// False if the clamped page equals the current page; nothing is
    /// notified or persisted in that case.
    pub fn set_current_page(&self, page: i64) -> bool {
        let info = {
            let mut state = self.state.borrow_mut();
            let total = pagination::total_pages(state.filtered.len());
            let clamped = pagination::clamp_page(page, total);
            if clamped == state.current_page {
                return false;
            }
            state.current_page = clamped;
            state.page_info()
        };

        self.events.dispatch(&StoreEvent::Pagination(info));
        self.save();
        true
    }

    /// Returns the current profile.
    pub fn profile(&self) -> Option<Rc<Profile>> {
        self.state.borrow().profile.clone()
    }

    /// Returns the canonical achievements collection.
    pub fn achievements(&self) -> Rc<[Achievement]> {
        Rc::clone(&self.state.borrow().achievements)
    }

    /// Returns the canonical content collection.
    pub fn content(&self) -> Rc<[ContentItem]> {
        Rc::clone(&self.state.borrow().content)
    }

    /// Returns the active filter.
    pub fn current_filter(&self) -> Filter {
        self.state.borrow().filter
    }

    /// Returns the filtered, newest-first view.
    pub fn filtered_content(&self) -> Rc<[ContentItem]> {
        Rc::clone(&self.state.borrow().filtered)
    }

    /// Returns the 1-based current page.
    pub fn current_page(&self) -> usize {
        self.state.borrow().current_page
    }

    /// Returns the number of pages in the filtered view.
    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.state.borrow().filtered.len())
    }

    /// Returns the current page and page count together.
    pub fn page_info(&self) -> PageInfo {
        self.state.borrow().page_info()
    }

    /// Returns the items on the current page; empty if out of range.
    pub fn paginated_content(&self) -> Vec<ContentItem> {
        let state = self.state.borrow();
        pagination::page_slice(&state.filtered, state.current_page).to_vec()
    }

    /// Registers a listener for `kind`.
    pub fn add_event_listener<F>(&self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&StoreEvent) -> Result<(), ListenerError> + 'static,
    {
        self.events.add_listener(kind, listener)
    }

    /// Removes a listener; returns true if it was registered under `kind`.
    pub fn remove_event_listener(&self, kind: EventKind, id: ListenerId) -> bool {
        self.events.remove_listener(kind, id)
    }

    /// Writes the current filter and page to durable storage.
    ///
    /// # Returns
    ///
    /// True if the write succeeded; failures are logged, never raised.
    pub fn persist_state(&self) -> bool {
        let (filter, page) = {
            let state = self.state.borrow();
            (state.filter, state.current_page)
        };
        self.persistence.save_preferences(filter, page)
    }

    /// Writes the filtered view to the session cache.
    ///
    /// # Returns
    ///
    /// True if the cache was written; oversized payloads and storage
    /// failures return false.
    pub fn cache_computed_data(&self) -> bool {
        let (filter, filtered) = {
            let state = self.state.borrow();
            (state.filter, Rc::clone(&state.filtered))
        };
        self.persistence.save_cache(filter, &filtered)
    }

    /// Returns the cached view when it is fresh and matches the active filter.
    ///
    /// Advisory only: the store never depends on the cache for correctness.
    pub fn load_cached_data(&self) -> Option<CachedContent> {
        self.persistence.load_cache(self.current_filter())
    }

    /// Evicts the cached view if it has expired; returns true if it did.
    pub fn sweep_cache(&self) -> bool {
        self.persistence.sweep_expired()
    }

    fn save(&self) {
        self.persist_state();
        self.cache_computed_data();
    }
}
