//! Pairing URI produced by the active connection attempt.

use super::store::{Store, Subscription};

/// Connection state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionState {
    /// Pairing URI of the current attempt.
    pub pairing_uri: Option<String>,
    /// Whether generating the pairing URI failed.
    pub pairing_error: bool,
}

/// Controller for [`ConnectionState`].
#[derive(Debug, Clone, Default)]
pub struct WcConnectionCtrl {
    store: Store<ConnectionState>,
}

impl WcConnectionCtrl {
    /// Creates a controller without a pairing URI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.store.state()
    }

    /// Subscribes to connection changes.
    pub fn subscribe(&self, listener: impl Fn(&ConnectionState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Stores a freshly generated pairing URI and clears any pairing error.
    pub fn set_pairing_uri(&self, uri: impl Into<String>) {
        let uri = Some(uri.into()).filter(|u| !u.is_empty());
        self.store.update(|s| {
            s.pairing_uri = uri;
            s.pairing_error = false;
        });
    }

    /// Records whether pairing failed.
    pub fn set_pairing_error(&self, error: bool) {
        self.store.update(|s| s.pairing_error = error);
    }
}
