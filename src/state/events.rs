//! UI interaction events (button clicks) for analytics listeners.

use chrono::Utc;

use super::store::{Store, Subscription};

/// Kind of modal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A button was clicked.
    Click,
}

/// A recorded modal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalEvent {
    /// Event kind.
    pub kind: EventKind,
    /// Event name (e.g. `NETWORK_BUTTON`).
    pub name: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Events state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsState {
    /// The most recent event.
    pub last_event: Option<ModalEvent>,
}

/// Controller for [`EventsState`].
#[derive(Debug, Clone, Default)]
pub struct EventsCtrl {
    store: Store<EventsState>,
}

impl EventsCtrl {
    /// Creates a controller with no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> EventsState {
        self.store.state()
    }

    /// Subscribes to events.
    pub fn subscribe(&self, listener: impl Fn(&EventsState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Records a click on the named element.
    pub fn click(&self, name: impl Into<String>) {
        let event = ModalEvent {
            kind: EventKind::Click,
            name: name.into(),
            timestamp: Utc::now().timestamp_millis(),
        };
        tracing::trace!(name = %event.name, "click");
        self.store.set(EventsState {
            last_event: Some(event),
        });
    }
}
