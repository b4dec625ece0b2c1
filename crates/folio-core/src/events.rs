// Rust guideline compliant 2026-10-18

//! Observer/notification hub.
//!
//! A registry of listeners keyed by [`EventKind`]. Dispatch is synchronous
//! and each listener call is isolated: an `Err` or a panic from one listener
//! is logged and the remaining listeners still run.

use crate::models::{Achievement, ContentItem, Filter, Profile};
use crate::pagination::PageInfo;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::str::FromStr;

/// Error type listeners may return.
pub type ListenerError = Box<dyn std::error::Error>;

type Listener = Rc<dyn Fn(&StoreEvent) -> Result<(), ListenerError>>;

/// Named store events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Profile replaced or cleared.
    Profile,
    /// Achievements replaced.
    Achievements,
    /// Canonical content replaced.
    Content,
    /// Active filter changed.
    Filter,
    /// Filtered view recomputed.
    FilteredContent,
    /// Current page changed.
    Pagination,
}

impl EventKind {
    /// Returns the event name used by view code.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Profile => "profile",
            EventKind::Achievements => "achievements",
            EventKind::Content => "content",
            EventKind::Filter => "filter",
            EventKind::FilteredContent => "filteredContent",
            EventKind::Pagination => "pagination",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "profile" => Ok(EventKind::Profile),
            "achievements" => Ok(EventKind::Achievements),
            "content" => Ok(EventKind::Content),
            "filter" => Ok(EventKind::Filter),
            "filteredContent" => Ok(EventKind::FilteredContent),
            "pagination" => Ok(EventKind::Pagination),
            _ => Err(format!("Unknown event: {value}")),
        }
    }
}

/// An event together with its payload.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// New profile, or `None` when cleared.
    Profile(Option<Rc<Profile>>),
    /// New achievements collection.
    Achievements(Rc<[Achievement]>),
    /// New canonical content collection.
    Content(Rc<[ContentItem]>),
    /// New active filter.
    Filter(Filter),
    /// Recomputed filtered view.
    FilteredContent(Rc<[ContentItem]>),
    /// New page position.
    Pagination(PageInfo),
}

impl StoreEvent {
    /// Returns the kind this event is dispatched under.
    pub fn kind(&self) -> EventKind {
        match self {
            StoreEvent::Profile(_) => EventKind::Profile,
            StoreEvent::Achievements(_) => EventKind::Achievements,
            StoreEvent::Content(_) => EventKind::Content,
            StoreEvent::Filter(_) => EventKind::Filter,
            StoreEvent::FilteredContent(_) => EventKind::FilteredContent,
            StoreEvent::Pagination(_) => EventKind::Pagination,
        }
    }
}

/// Handle returned on registration, used to remove a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Listener registry.
#[derive(Default)]
pub struct EventHub {
    listeners: RefCell<HashMap<EventKind, BTreeMap<ListenerId, Listener>>>,
    next_id: Cell<u64>,
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let counts: HashMap<EventKind, usize> = self
            .listeners
            .borrow()
            .iter()
            .map(|(kind, set)| (*kind, set.len()))
            .collect();
        f.debug_struct("EventHub").field("listeners", &counts).finish()
    }
}

impl EventHub {
    /// Creates an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener for `kind`.
    ///
    /// # Returns
    ///
    /// A handle for [`EventHub::remove_listener`].
    pub fn add_listener<F>(&self, kind: EventKind, listener: F) -> ListenerId
    where
        F: Fn(&StoreEvent) -> Result<(), ListenerError> + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .insert(id, Rc::new(listener));
        id
    }

    /// Removes a listener.
    ///
    /// # Returns
    ///
    /// True if the listener was registered under `kind`.
    pub fn remove_listener(&self, kind: EventKind, id: ListenerId) -> bool {
        self.listeners
            .borrow_mut()
            .get_mut(&kind)
            .is_some_and(|set| set.remove(&id).is_some())
    }

    /// Returns the number of listeners registered under `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.borrow().get(&kind).map_or(0, BTreeMap::len)
    }

    /// Invokes every listener registered for the event's kind.
    ///
    /// Listeners may add or remove listeners, or call back into the store;
    /// no registry borrow is held while they run. A listener removed by an
    /// earlier listener in the same dispatch is skipped.
    ///
    /// # Returns
    ///
    /// The number of listeners that failed.
    pub fn dispatch(&self, event: &StoreEvent) -> usize {
        let kind = event.kind();
        let snapshot: Vec<(ListenerId, Listener)> = match self.listeners.borrow().get(&kind) {
            Some(set) => set.iter().map(|(id, l)| (*id, Rc::clone(l))).collect(),
            None => return 0,
        };

        let mut failures = 0;
        for (id, listener) in snapshot {
            if !self.is_registered(kind, id) {
                continue;
            }
            match panic::catch_unwind(AssertUnwindSafe(|| listener(event))) {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    failures += 1;
                    tracing::warn!(event = %kind, listener = id.0, error = %err, "Listener failed");
                }
                Err(payload) => {
                    failures += 1;
                    tracing::warn!(
                        event = %kind,
                        listener = id.0,
                        panic = panic_message(payload.as_ref()),
                        "Listener panicked"
                    );
                }
            }
        }
        failures
    }

    fn is_registered(&self, kind: EventKind, id: ListenerId) -> bool {
        self.listeners
            .borrow()
            .get(&kind)
            .is_some_and(|set| set.contains_key(&id))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_round_trip() {
        for kind in [
            EventKind::Profile,
            EventKind::Achievements,
            EventKind::Content,
            EventKind::Filter,
            EventKind::FilteredContent,
            EventKind::Pagination,
        ] {
            assert_eq!(kind.as_str().parse::<EventKind>(), Ok(kind));
        }
        assert!("bogus".parse::<EventKind>().is_err());
    }

    #[test]
    fn test_dispatch_only_reaches_matching_kind() {
        let hub = EventHub::new();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        hub.add_listener(EventKind::Filter, move |_| {
            counter.set(counter.get() + 1);
            Ok(())
        });

        hub.dispatch(&StoreEvent::Filter(Filter::Blog));
        hub.dispatch(&StoreEvent::Pagination(PageInfo {
            current_page: 1,
            total_pages: 1,
        }));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_failing_listeners_do_not_stop_dispatch() {
        let hub = EventHub::new();
        let reached = Rc::new(Cell::new(false));
        let flag = Rc::clone(&reached);

        hub.add_listener(EventKind::Filter, |_| Err("boom".into()));
        hub.add_listener(EventKind::Filter, |_| panic!("listener exploded"));
        hub.add_listener(EventKind::Filter, move |_| {
            flag.set(true);
            Ok(())
        });

        let failures = hub.dispatch(&StoreEvent::Filter(Filter::All));
        assert_eq!(failures, 2);
        assert!(reached.get());
    }

    #[test]
    fn test_remove_listener() {
        let hub = EventHub::new();
        let id = hub.add_listener(EventKind::Content, |_| Ok(()));
        assert_eq!(hub.listener_count(EventKind::Content), 1);
        assert!(hub.remove_listener(EventKind::Content, id));
        assert!(!hub.remove_listener(EventKind::Content, id));
        assert!(!hub.remove_listener(EventKind::Filter, id));
        assert_eq!(hub.listener_count(EventKind::Content), 0);
    }

    #[test]
    fn test_listener_removed_mid_dispatch_is_skipped() {
        let hub = Rc::new(EventHub::new());
        let second_ran = Rc::new(Cell::new(false));
        let victim = Rc::new(Cell::new(None));

        let hub_ref = Rc::downgrade(&hub);
        let victim_ref = Rc::clone(&victim);
        hub.add_listener(EventKind::Filter, move |_| {
            if let (Some(hub), Some(id)) = (hub_ref.upgrade(), victim_ref.get()) {
                hub.remove_listener(EventKind::Filter, id);
            }
            Ok(())
        });
        let flag = Rc::clone(&second_ran);
        let id = hub.add_listener(EventKind::Filter, move |_| {
            flag.set(true);
            Ok(())
        });
        victim.set(Some(id));

        hub.dispatch(&StoreEvent::Filter(Filter::All));
        assert!(!second_ran.get());
    }
}
