//! Modal open/close state.

use crate::domain::RouterView;

use super::account::AccountCtrl;
use super::router::RouterCtrl;
use super::store::{Store, Subscription};

/// Modal state snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    /// Whether the modal is visible.
    pub open: bool,
}

/// Controller for [`ModalState`].
///
/// Opening resets the router, so the controller holds handles to the router
/// and account controllers it was built with.
#[derive(Debug, Clone)]
pub struct ModalCtrl {
    store: Store<ModalState>,
    router: RouterCtrl,
    account: AccountCtrl,
}

impl ModalCtrl {
    /// Creates a closed modal bound to `router` and `account`.
    #[must_use]
    pub fn new(router: RouterCtrl, account: AccountCtrl) -> Self {
        Self {
            store: Store::default(),
            router,
            account,
        }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> ModalState {
        self.store.state()
    }

    /// Subscribes to open/close changes.
    pub fn subscribe(&self, listener: impl Fn(&ModalState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Opens the modal at `route`.
    ///
    /// Without a route the modal lands on [`RouterView::Account`] when a
    /// session is connected and on [`RouterView::ConnectWallet`] otherwise.
    pub fn open(&self, route: Option<RouterView>) {
        let view = route.unwrap_or_else(|| {
            if self.account.state().is_connected {
                RouterView::Account
            } else {
                RouterView::ConnectWallet
            }
        });
        self.router.reset(view);
        self.store.set(ModalState { open: true });
    }

    /// Closes the modal.
    pub fn close(&self) {
        self.store.set(ModalState { open: false });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_with_route_resets_router() {
        let router = RouterCtrl::new();
        router.push(RouterView::Qrcode);
        let modal = ModalCtrl::new(router.clone(), AccountCtrl::new());

        modal.open(Some(RouterView::SelectNetwork));

        assert!(modal.state().open);
        assert_eq!(router.state().history, vec![RouterView::SelectNetwork]);
    }

    #[test]
    fn test_open_default_route_depends_on_connection() {
        let router = RouterCtrl::new();
        let account = AccountCtrl::new();
        let modal = ModalCtrl::new(router.clone(), account.clone());

        modal.open(None);
        assert_eq!(router.view(), RouterView::ConnectWallet);

        account.set_address(Some("0xabc".to_string()));
        modal.open(None);
        assert_eq!(router.view(), RouterView::Account);

        modal.close();
        assert!(!modal.state().open);
    }
}
