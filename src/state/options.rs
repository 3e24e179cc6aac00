//! Modal-wide options: selected chain, supported chains, standalone URI.

use crate::domain::Chain;

use super::store::{Store, Subscription};

/// Options state snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsState {
    /// Chain the modal currently considers active.
    pub selected_chain: Option<Chain>,
    /// Chains the application supports.
    pub chains: Option<Vec<Chain>>,
    /// Chain namespaces used in standalone mode (e.g. `eip155:1`).
    pub standalone_chains: Option<Vec<String>>,
    /// Caller-supplied URI overriding the generated pairing URI.
    pub standalone_uri: Option<String>,
    /// Whether the modal runs without a wallet-connection client.
    pub is_standalone: bool,
    /// Whether the mobile wallet list was customised.
    pub is_custom_mobile: bool,
    /// Whether the desktop wallet list was customised.
    pub is_custom_desktop: bool,
    /// Whether explorer data finished loading.
    pub is_data_loaded: bool,
    /// Whether the UI bundle finished loading.
    pub is_ui_loaded: bool,
}

impl OptionsState {
    /// Returns `true` when more than one chain is supported.
    #[must_use]
    pub fn is_multichain(&self) -> bool {
        self.chains.as_ref().is_some_and(|chains| chains.len() > 1)
    }
}

/// Controller for [`OptionsState`].
#[derive(Debug, Clone, Default)]
pub struct OptionsCtrl {
    store: Store<OptionsState>,
}

impl OptionsCtrl {
    /// Creates a controller with empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> OptionsState {
        self.store.state()
    }

    /// Subscribes to every options write.
    pub fn subscribe(&self, listener: impl Fn(&OptionsState) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Currently selected chain.
    #[must_use]
    pub fn get_selected_chain(&self) -> Option<Chain> {
        self.store.with(|s| s.selected_chain.clone())
    }

    /// Overwrites the selected chain unconditionally and publishes.
    pub fn set_selected_chain(&self, chain: Chain) {
        tracing::debug!(chain_id = chain.id, name = %chain.name, "selected chain set");
        self.store.update(|s| s.selected_chain = Some(chain));
    }

    /// Sets the supported chains.
    pub fn set_chains(&self, chains: Option<Vec<Chain>>) {
        self.store.update(|s| s.chains = chains);
    }

    /// Sets the standalone chain namespaces.
    pub fn set_standalone_chains(&self, chains: Option<Vec<String>>) {
        self.store.update(|s| s.standalone_chains = chains);
    }

    /// Sets the standalone URI; empty strings clear it.
    pub fn set_standalone_uri(&self, uri: Option<String>) {
        let uri = uri.filter(|u| !u.is_empty());
        self.store.update(|s| s.standalone_uri = uri);
    }

    /// Marks the modal as standalone.
    pub fn set_is_standalone(&self, is_standalone: bool) {
        self.store.update(|s| s.is_standalone = is_standalone);
    }

    /// Marks whether the mobile wallet list was customised.
    pub fn set_is_custom_mobile(&self, value: bool) {
        self.store.update(|s| s.is_custom_mobile = value);
    }

    /// Marks whether the desktop wallet list was customised.
    pub fn set_is_custom_desktop(&self, value: bool) {
        self.store.update(|s| s.is_custom_desktop = value);
    }

    /// Marks explorer data as loaded.
    pub fn set_is_data_loaded(&self, value: bool) {
        self.store.update(|s| s.is_data_loaded = value);
    }

    /// Marks the UI as loaded.
    pub fn set_is_ui_loaded(&self, value: bool) {
        self.store.update(|s| s.is_ui_loaded = value);
    }
}
