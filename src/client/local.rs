//! In-process wallet-connection client.
//!
//! `LocalClient` keeps its network in a [`Store`], so every
//! [`LocalClient::switch_network`] is delivered to live watchers the same way
//! a real client delivers wallet-side network switches. Balance and
//! connection outcomes are scripted.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{NetworkCallback, NetworkChange, NetworkWatch, WalletClient};
use crate::domain::{Balance, Chain, ModalError, Result};
use crate::state::Store;

#[derive(Debug)]
struct LocalInner {
    network: Store<NetworkChange>,
    balances: Mutex<HashMap<u64, Balance>>,
    balance_failure: Mutex<Option<String>>,
    connect_failure: Mutex<Option<String>>,
    connections: Mutex<Vec<(String, Option<u64>)>>,
    balance_queries: AtomicUsize,
}

/// Scriptable in-process [`WalletClient`].
#[derive(Debug, Clone)]
pub struct LocalClient {
    inner: Arc<LocalInner>,
}

impl LocalClient {
    /// Creates a client on the first of `chains`.
    #[must_use]
    pub fn new(chains: Vec<Chain>) -> Self {
        let network = NetworkChange {
            chain: chains.first().cloned(),
            chains,
        };
        Self {
            inner: Arc::new(LocalInner {
                network: Store::new(network),
                balances: Mutex::new(HashMap::new()),
                balance_failure: Mutex::new(None),
                connect_failure: Mutex::new(None),
                connections: Mutex::new(Vec::new()),
                balance_queries: AtomicUsize::new(0),
            }),
        }
    }

    /// Moves the wallet to `chain` and notifies watchers.
    pub fn switch_network(&self, chain: Chain) {
        tracing::debug!(chain_id = chain.id, "local client switching network");
        self.inner.network.update(|n| n.chain = Some(chain));
    }

    /// Delivers an arbitrary notification to watchers.
    pub fn emit(&self, change: NetworkChange) {
        self.inner.network.set(change);
    }

    /// Chain after the current one in the configured list, wrapping around.
    #[must_use]
    pub fn next_chain(&self) -> Option<Chain> {
        self.inner.network.with(|n| {
            let position = n
                .chain
                .as_ref()
                .and_then(|c| n.chains.iter().position(|x| x.id == c.id));
            match position {
                Some(i) => n.chains.get((i + 1) % n.chains.len()).cloned(),
                None => n.chains.first().cloned(),
            }
        })
    }

    /// Scripts the balance returned for `chain_id`.
    pub fn set_balance(&self, chain_id: u64, balance: Balance) {
        self.inner.balances.lock().insert(chain_id, balance);
    }

    /// Makes every balance query fail with `message`.
    pub fn fail_balance(&self, message: impl Into<String>) {
        *self.inner.balance_failure.lock() = Some(message.into());
    }

    /// Makes every connection attempt fail with `message`.
    pub fn fail_connect(&self, message: impl Into<String>) {
        *self.inner.connect_failure.lock() = Some(message.into());
    }

    /// Connection attempts so far, as `(connector_id, chain_id)`.
    #[must_use]
    pub fn connections(&self) -> Vec<(String, Option<u64>)> {
        self.inner.connections.lock().clone()
    }

    /// Number of balance queries so far.
    #[must_use]
    pub fn balance_queries(&self) -> usize {
        self.inner.balance_queries.load(Ordering::SeqCst)
    }

    /// Number of live network watches.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.network.listener_count()
    }
}

#[async_trait]
impl WalletClient for LocalClient {
    async fn connect_connector(&self, connector_id: &str, chain_id: Option<u64>) -> Result<()> {
        self.inner
            .connections
            .lock()
            .push((connector_id.to_string(), chain_id));

        match self.inner.connect_failure.lock().clone() {
            Some(message) => Err(ModalError::client(message)),
            None => Ok(()),
        }
    }

    fn watch_network(&self, callback: NetworkCallback) -> NetworkWatch {
        self.inner.network.subscribe(move |change| callback(change))
    }

    fn network(&self) -> NetworkChange {
        self.inner.network.state()
    }

    async fn fetch_balance(&self, address: &str, chain_id: u64) -> Result<Balance> {
        self.inner.balance_queries.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self.inner.balance_failure.lock().clone() {
            return Err(ModalError::client(message));
        }

        self.inner
            .balances
            .lock()
            .get(&chain_id)
            .cloned()
            .ok_or_else(|| ModalError::client(format!("No balance for {address} on chain {chain_id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chains() -> Vec<Chain> {
        vec![Chain::new(1, "Ethereum"), Chain::new(137, "Polygon")]
    }

    #[test]
    fn test_watch_receives_switches_until_dropped() {
        let client = LocalClient::new(chains());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let watch = client.watch_network(Box::new({
            let seen = Arc::clone(&seen);
            move |change: &NetworkChange| seen.lock().push(change.chain.as_ref().map(|c| c.id))
        }));

        client.switch_network(Chain::new(137, "Polygon"));
        assert_eq!(client.watcher_count(), 1);
        drop(watch);
        client.switch_network(Chain::new(1, "Ethereum"));

        assert_eq!(*seen.lock(), vec![Some(137)]);
        assert_eq!(client.watcher_count(), 0);
    }

    #[test]
    fn test_next_chain_wraps() {
        let client = LocalClient::new(chains());
        assert_eq!(client.next_chain().map(|c| c.id), Some(137));
        client.switch_network(Chain::new(137, "Polygon"));
        assert_eq!(client.next_chain().map(|c| c.id), Some(1));
        client.switch_network(Chain::new(5, "Unknown"));
        assert_eq!(client.next_chain().map(|c| c.id), Some(1));
    }

    #[tokio::test]
    async fn test_connect_records_and_fails_when_scripted() {
        let client = LocalClient::new(chains());
        client.connect_connector("injected", Some(1)).await.unwrap();
        client.fail_connect("User rejected");
        let err = client.connect_connector("walletConnect", None).await.unwrap_err();

        assert_eq!(err.to_string(), "User rejected");
        assert_eq!(
            client.connections(),
            vec![
                ("injected".to_string(), Some(1)),
                ("walletConnect".to_string(), None)
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_balance_unknown_chain_errors() {
        let client = LocalClient::new(chains());
        let err = client.fetch_balance("0xabc", 1).await.unwrap_err();
        assert!(err.to_string().contains("chain 1"));
        assert_eq!(client.balance_queries(), 1);
    }
}
