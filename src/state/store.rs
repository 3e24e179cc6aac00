//! Observable state container shared by the modal controllers.
//!
//! A [`Store`] holds one value and a list of listeners. Every write replaces
//! the value under a lock, releases the lock, and then calls each listener
//! synchronously with the new snapshot, in subscription order. There is no
//! initial replay: callers read [`Store::state`] first and subscribe after.
//!
//! # Example
//!
//! ```
//! use wcm_modal::state::store::Store;
//!
//! let store = Store::new(0_u32);
//! let subscription = store.subscribe(|value| println!("now {value}"));
//! store.set(1);
//! subscription.unsubscribe();
//! store.set(2); // no listener left
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

// ============================================================================
// Types
// ============================================================================

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S> {
    state: RwLock<S>,
    listeners: Mutex<Vec<(u64, Listener<S>)>>,
    next_id: AtomicU64,
}

/// Shared, observable state.
///
/// Cloning a `Store` yields another handle to the same state.
pub struct Store<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.read())
            .field("listeners", &self.inner.listeners.lock().len())
            .finish()
    }
}

impl<S: Clone + Default + Send + Sync + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(initial),
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Reads the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.state.read())
    }

    /// Registers a listener called after every write.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped or explicitly unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Arc::new(listener)));

        let weak: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.lock().retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Mutates the state in place and publishes the result.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        let snapshot = {
            let mut state = self.inner.state.write();
            f(&mut state);
            state.clone()
        };
        self.publish(&snapshot);
    }

    /// Replaces the whole state and publishes it.
    pub fn set(&self, value: S) {
        self.update(|state| *state = value);
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    fn publish(&self, snapshot: &S) {
        // Listeners may write to this store or unsubscribe, so neither lock is held here.
        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
        }
    }
}

// ============================================================================
// Subscription
// ============================================================================

/// Drop guard for a registered listener or watch.
///
/// Releasing happens exactly once: on [`Subscription::unsubscribe`] or on drop,
/// whichever comes first.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wraps a release function.
    pub fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release.
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Releases the subscription now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Returns `true` while the subscription has not been released.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
