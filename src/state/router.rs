//! Modal router: current view, history and route data.

use crate::domain::{RouterData, RouterView};

use super::store::{Store, Subscription};

/// Router state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouterState {
    /// Views visited, oldest first; the last entry is the current view.
    pub history: Vec<RouterView>,
    /// Current view.
    pub view: RouterView,
    /// Data attached to the route (e.g. the pending wallet).
    pub data: Option<RouterData>,
}

impl Default for RouterState {
    fn default() -> Self {
        Self {
            history: vec![RouterView::ConnectWallet],
            view: RouterView::ConnectWallet,
            data: None,
        }
    }
}

/// Controller for [`RouterState`].
#[derive(Debug, Clone, Default)]
pub struct RouterCtrl {
    store: Store<RouterState>,
}

impl RouterCtrl {
    /// Creates a router at [`RouterView::ConnectWallet`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> RouterState {
        self.store.state()
    }

    /// Current view.
    #[must_use]
    pub fn view(&self) -> RouterView {
        self.store.with(|s| s.view)
    }

    /// Subscribes to every router write.
    pub fn subscribe(&self, listener: impl Fn(&RouterState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Navigates to `view`. Pushing the current view does nothing.
    pub fn push(&self, view: RouterView) {
        self.push_with_data(view, None);
    }

    /// Navigates to `view`, replacing route data when `data` is given.
    pub fn push_with_data(&self, view: RouterView, data: Option<RouterData>) {
        if self.view() == view {
            return;
        }
        self.store.update(|s| {
            s.view = view;
            if let Some(data) = data {
                s.data = Some(data);
            }
            s.history.push(view);
        });
    }

    /// Replaces the current view without growing history.
    pub fn replace(&self, view: RouterView) {
        if self.view() == view {
            return;
        }
        self.store.update(|s| {
            s.view = view;
            match s.history.last_mut() {
                Some(last) => *last = view,
                None => s.history.push(view),
            }
        });
    }

    /// Returns to the previous view, if there is one.
    pub fn go_back(&self) {
        if self.store.with(|s| s.history.len() <= 1) {
            return;
        }
        self.store.update(|s| {
            s.history.pop();
            if let Some(previous) = s.history.last() {
                s.view = *previous;
            }
        });
    }

    /// Replaces the route data.
    pub fn set_data(&self, data: RouterData) {
        self.store.update(|s| s.data = Some(data));
    }

    /// Resets history to a single `view`.
    pub fn reset(&self, view: RouterView) {
        self.store.update(|s| {
            s.view = view;
            s.history = vec![view];
        });
    }
}
