//! Explicitly constructed modal context.
//!
//! A [`ModalContext`] bundles every controller with the platform services the
//! modal talks to. Components receive it at construction instead of reaching
//! for process-wide singletons, so tests can wire in fakes.
//!
//! ```text
//! ModalContext
//! ├── controllers (options, account, router, modal, toast, connection, events, config)
//! └── services
//!     ├── WalletClient
//!     ├── Navigator / Clipboard / KeyValueStorage
//!     ├── ExplorerClient / ImageLoader
//!     └── Device
//! ```

use std::fmt;
use std::sync::Arc;

use crate::client::{ExplorerClient, HttpImageLoader, ImageLoader, WalletClient};
use crate::state::platform::{
    Clipboard, ClipboardManager, Device, KeyValueStorage, MemoryStorage, Navigator, SystemNavigator,
};
use crate::state::{
    AccountCtrl, ConfigCtrl, EventsCtrl, ModalConfig, ModalCtrl, OptionsCtrl, RouterCtrl, ToastCtrl,
    WcConnectionCtrl,
};

// ============================================================================
// Services
// ============================================================================

struct Services {
    client: Arc<dyn WalletClient>,
    navigator: Arc<dyn Navigator>,
    clipboard: Arc<dyn Clipboard>,
    storage: Arc<dyn KeyValueStorage>,
    image_loader: Arc<dyn ImageLoader>,
    explorer: ExplorerClient,
    device: Device,
}

// ============================================================================
// ModalContext
// ============================================================================

/// Controllers and services shared by every modal component.
///
/// Cloning is cheap; all clones observe the same state.
#[derive(Clone)]
pub struct ModalContext {
    /// Selected chain, supported chains, standalone URI.
    pub options: OptionsCtrl,
    /// Connected account and balance.
    pub account: AccountCtrl,
    /// Current view and history.
    pub router: RouterCtrl,
    /// Open/closed state of the modal.
    pub modal: ModalCtrl,
    /// Transient notifications.
    pub toast: ToastCtrl,
    /// Pairing URI of the active connection attempt.
    pub connection: WcConnectionCtrl,
    /// UI events.
    pub events: EventsCtrl,
    /// Modal configuration.
    pub config: ConfigCtrl,
    services: Arc<Services>,
}

impl ModalContext {
    /// Starts building a context around `config` and `client`.
    #[must_use]
    pub fn builder(config: ModalConfig, client: Arc<dyn WalletClient>) -> ModalContextBuilder {
        ModalContextBuilder::new(config, client)
    }

    /// The wallet-connection client.
    #[must_use]
    pub fn client(&self) -> &dyn WalletClient {
        self.services.client.as_ref()
    }

    /// Shared handle to the wallet-connection client.
    #[must_use]
    pub fn client_handle(&self) -> Arc<dyn WalletClient> {
        Arc::clone(&self.services.client)
    }

    /// Link opener.
    #[must_use]
    pub fn navigator(&self) -> &dyn Navigator {
        self.services.navigator.as_ref()
    }

    /// System clipboard.
    #[must_use]
    pub fn clipboard(&self) -> &dyn Clipboard {
        self.services.clipboard.as_ref()
    }

    /// Persistent storage.
    #[must_use]
    pub fn storage(&self) -> &dyn KeyValueStorage {
        self.services.storage.as_ref()
    }

    /// Image preloader.
    #[must_use]
    pub fn image_loader(&self) -> &dyn ImageLoader {
        self.services.image_loader.as_ref()
    }

    /// Explorer service.
    #[must_use]
    pub fn explorer(&self) -> &ExplorerClient {
        &self.services.explorer
    }

    /// Device class the modal runs on.
    #[must_use]
    pub fn device(&self) -> Device {
        self.services.device
    }
}

impl fmt::Debug for ModalContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalContext")
            .field("options", &self.options.state())
            .field("account", &self.account.state())
            .field("view", &self.router.view())
            .field("device", &self.services.device)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ModalContext`].
///
/// Services that are not set fall back to the system navigator, the system
/// clipboard, in-memory storage and an HTTP image loader on a desktop device.
pub struct ModalContextBuilder {
    config: ModalConfig,
    client: Arc<dyn WalletClient>,
    navigator: Option<Arc<dyn Navigator>>,
    clipboard: Option<Arc<dyn Clipboard>>,
    storage: Option<Arc<dyn KeyValueStorage>>,
    image_loader: Option<Arc<dyn ImageLoader>>,
    device: Device,
}

impl ModalContextBuilder {
    fn new(config: ModalConfig, client: Arc<dyn WalletClient>) -> Self {
        Self {
            config,
            client,
            navigator: None,
            clipboard: None,
            storage: None,
            image_loader: None,
            device: Device::default(),
        }
    }

    #[must_use]
    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    #[must_use]
    pub fn clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    #[must_use]
    pub fn storage(mut self, storage: Arc<dyn KeyValueStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    #[must_use]
    pub fn image_loader(mut self, image_loader: Arc<dyn ImageLoader>) -> Self {
        self.image_loader = Some(image_loader);
        self
    }

    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Builds the context and seeds the options from the configuration.
    #[must_use]
    pub fn build(self) -> ModalContext {
        let options = OptionsCtrl::new();
        let chains = (!self.config.chains.is_empty()).then(|| self.config.chains.clone());
        options.set_chains(chains);
        if let Some(chain) = self.config.initial_chain() {
            options.set_selected_chain(chain.clone());
        }
        options.set_standalone_chains(self.config.standalone_chains.clone());
        options.set_standalone_uri(self.config.standalone_uri.clone());
        options.set_is_standalone(self.config.standalone_uri.is_some());

        let account = AccountCtrl::new();
        let router = RouterCtrl::new();
        let modal = ModalCtrl::new(router.clone(), account.clone());
        let explorer = ExplorerClient::from_config(&self.config);

        let services = Services {
            client: self.client,
            navigator: self.navigator.unwrap_or_else(|| Arc::new(SystemNavigator)),
            clipboard: self
                .clipboard
                .unwrap_or_else(|| Arc::new(ClipboardManager::new())),
            storage: self
                .storage
                .unwrap_or_else(|| Arc::new(MemoryStorage::new())),
            image_loader: self
                .image_loader
                .unwrap_or_else(|| Arc::new(HttpImageLoader::new())),
            explorer,
            device: self.device,
        };

        tracing::debug!(device = ?services.device, "modal context built");

        ModalContext {
            options,
            account,
            router,
            modal,
            toast: ToastCtrl::new(),
            connection: WcConnectionCtrl::new(),
            events: EventsCtrl::new(),
            config: ConfigCtrl::new(self.config),
            services: Arc::new(services),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::LocalClient;
    use crate::domain::Chain;

    #[test]
    fn test_build_seeds_options_from_config() {
        let config = ModalConfig {
            default_chain: Some(137),
            standalone_uri: Some("wc:abc@2".to_string()),
            ..ModalConfig::default()
        };
        let client = Arc::new(LocalClient::new(config.chains.clone()));
        let ctx = ModalContext::builder(config, client).build();

        let options = ctx.options.state();
        assert_eq!(options.selected_chain, Some(Chain::new(137, "Polygon")));
        assert_eq!(options.chains.map(|c| c.len()), Some(3));
        assert_eq!(options.standalone_uri.as_deref(), Some("wc:abc@2"));
        assert!(options.is_standalone);
    }

    #[test]
    fn test_empty_chain_list_leaves_options_unset() {
        let config = ModalConfig {
            chains: Vec::new(),
            ..ModalConfig::default()
        };
        let ctx = ModalContext::builder(config, Arc::new(LocalClient::new(Vec::new()))).build();

        let options = ctx.options.state();
        assert!(options.chains.is_none());
        assert!(options.selected_chain.is_none());
        assert!(!options.is_standalone);
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = ModalContext::builder(ModalConfig::default(), Arc::new(LocalClient::new(Vec::new())))
            .device(Device::Android)
            .build();
        let other = ctx.clone();
        other.account.set_address(Some("0xabc".to_string()));

        assert!(ctx.account.state().is_connected);
        assert_eq!(ctx.device(), Device::Android);
    }
}
