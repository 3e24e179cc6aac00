//! Connected account state and balance refresh.

use parking_lot::Mutex;

use crate::client::WalletClient;
use crate::domain::{Balance, Result};

use super::store::{Store, Subscription};

/// Account state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// Connected address.
    pub address: Option<String>,
    /// Whether a session is connected.
    pub is_connected: bool,
    /// Balance on the selected chain; `None` while unknown.
    pub balance: Option<Balance>,
}

/// Controller for [`AccountState`].
#[derive(Debug, Clone, Default)]
pub struct AccountCtrl {
    store: Store<AccountState>,
}

impl AccountCtrl {
    /// Creates a disconnected account.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> AccountState {
        self.store.state()
    }

    /// Subscribes to every account write.
    pub fn subscribe(&self, listener: impl Fn(&AccountState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Sets the connected address, or disconnects on `None`.
    pub fn set_address(&self, address: Option<String>) {
        self.store.update(|s| {
            s.is_connected = address.is_some();
            s.address = address;
        });
    }

    /// Stores a balance fetched elsewhere.
    pub fn set_balance(&self, balance: Balance) {
        self.store.update(|s| s.balance = Some(balance));
    }

    /// Forgets the cached balance.
    pub fn reset_balance(&self) {
        self.store.update(|s| s.balance = None);
    }

    /// Clears the whole account.
    pub fn reset(&self) {
        self.store.set(AccountState::default());
    }

    /// Fetches the balance for the connected address on `chain_id` and stores
    /// it while `active` still holds `chain_id`.
    ///
    /// `active` stays locked across the check and the write, so a chain switch
    /// that takes it before resetting the balance is never overwritten by a
    /// result from the previous chain. Without an address this is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if the balance was stored.
    ///
    /// # Errors
    ///
    /// Returns the client's error if the balance query fails; the stored
    /// balance is left untouched in that case.
    pub async fn fetch_balance(
        &self,
        client: &dyn WalletClient,
        chain_id: u64,
        active: &Mutex<Option<u64>>,
    ) -> Result<bool> {
        let Some(address) = self.store.with(|s| s.address.clone()) else {
            return Ok(false);
        };

        let balance = client.fetch_balance(&address, chain_id).await?;
        let stored = {
            let active = active.lock();
            if *active == Some(chain_id) {
                self.store.update(|s| s.balance = Some(balance));
                true
            } else {
                false
            }
        };
        if stored {
            tracing::debug!(chain_id, "balance fetched");
        } else {
            tracing::debug!(chain_id, "discarding balance for superseded chain");
        }
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LocalClient;
    use crate::domain::Chain;

    #[test]
    fn test_set_address_toggles_connection() {
        let account = AccountCtrl::new();
        account.set_address(Some("0xabc".to_string()));
        assert!(account.state().is_connected);
        account.set_address(None);
        assert!(!account.state().is_connected);
    }

    #[tokio::test]
    async fn test_fetch_balance_stores_result() {
        let client = LocalClient::new(vec![Chain::new(1, "Ethereum")]);
        client.set_balance(1, Balance::new("1.5", "ETH"));
        let account = AccountCtrl::new();
        account.set_address(Some("0xabc".to_string()));

        let stored = account.fetch_balance(&client, 1, &Mutex::new(Some(1))).await.unwrap();

        assert!(stored);
        assert_eq!(account.state().balance, Some(Balance::new("1.5", "ETH")));
    }

    #[tokio::test]
    async fn test_fetch_balance_without_address_is_noop() {
        let client = LocalClient::new(vec![Chain::new(1, "Ethereum")]);
        let account = AccountCtrl::new();

        let stored = account.fetch_balance(&client, 1, &Mutex::new(Some(1))).await.unwrap();

        assert!(!stored);
        assert_eq!(client.balance_queries(), 0);
        assert!(account.state().balance.is_none());
    }

    #[tokio::test]
    async fn test_fetch_balance_for_superseded_chain_is_discarded() {
        let client = LocalClient::new(vec![Chain::new(137, "Polygon"), Chain::new(10, "Optimism")]);
        client.set_balance(137, Balance::new("420.5", "MATIC"));
        let account = AccountCtrl::new();
        account.set_address(Some("0xabc".to_string()));

        let stored = account.fetch_balance(&client, 137, &Mutex::new(Some(10))).await.unwrap();

        assert!(!stored);
        assert_eq!(client.balance_queries(), 1);
        assert!(account.state().balance.is_none());
    }

    #[tokio::test]
    async fn test_fetch_balance_failure_keeps_state() {
        let client = LocalClient::new(vec![Chain::new(1, "Ethereum")]);
        client.fail_balance("rpc down");
        let account = AccountCtrl::new();
        account.set_address(Some("0xabc".to_string()));
        account.set_balance(Balance::new("1.0", "ETH"));

        let err = account.fetch_balance(&client, 1, &Mutex::new(Some(1))).await.unwrap_err();

        assert_eq!(err.to_string(), "rpc down");
        assert_eq!(account.state().balance, Some(Balance::new("1.0", "ETH")));
    }
}
