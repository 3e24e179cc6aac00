//! Wallet-connection client contract and the explorer service.
//!
//! - [`WalletClient`] - what the modal consumes from the connection client
//! - [`local`] - an in-process client used by the demo and by tests
//! - [`explorer`] - wallet image URLs and image preloading

pub mod explorer;
pub mod local;

pub use explorer::{ExplorerClient, HttpImageLoader, ImageLoader};
pub use local::LocalClient;

use async_trait::async_trait;

use crate::domain::{Balance, Chain, Result};
use crate::state::Subscription;

// ============================================================================
// Network Notifications
// ============================================================================

/// Network-change notification delivered by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkChange {
    /// Chain the wallet is on now; `None` while disconnected.
    pub chain: Option<Chain>,
    /// Chains the client is configured for.
    pub chains: Vec<Chain>,
}

/// Callback invoked on every network-change notification.
pub type NetworkCallback = Box<dyn Fn(&NetworkChange) + Send + Sync>;

/// Handle to an active network watch. Dropping it stops the watch.
pub type NetworkWatch = Subscription;

// ============================================================================
// Client Trait
// ============================================================================

/// Operations the modal consumes from the wallet-connection client.
#[async_trait]
pub trait WalletClient: Send + Sync {
    /// Connects through the connector with `connector_id`, on `chain_id` when given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ModalError::Client`] when the connection fails.
    async fn connect_connector(&self, connector_id: &str, chain_id: Option<u64>) -> Result<()>;

    /// Starts delivering network-change notifications to `callback`.
    fn watch_network(&self, callback: NetworkCallback) -> NetworkWatch;

    /// The network as the client currently sees it.
    fn network(&self) -> NetworkChange;

    /// Native balance of `address` on `chain_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the balance query fails.
    async fn fetch_balance(&self, address: &str, chain_id: u64) -> Result<Balance>;
}
