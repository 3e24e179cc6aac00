//! Modal configuration with persistence.
//!
//! [`ModalConfig`] is what the embedding application configures (project id,
//! supported chains, feature flags, custom wallet images). [`ConfigCtrl`]
//! holds it at runtime so every component reads the same flags.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/wcm-modal/config.json`
//! - macOS: `~/Library/Application Support/wcm-modal/config.json`
//! - Windows: `%APPDATA%/wcm-modal/config.json`

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXPLORER_API_URL;
use crate::domain::{Chain, Result, WalletData, find_chain};

use super::platform::paths::AppPaths;
use super::store::{Store, Subscription};

// ============================================================================
// ModalConfig
// ============================================================================

fn default_true() -> bool {
    true
}

fn default_explorer_api_url() -> String {
    DEFAULT_EXPLORER_API_URL.to_string()
}

fn default_chains() -> Vec<Chain> {
    vec![
        Chain::new(1, "Ethereum"),
        Chain::new(137, "Polygon"),
        Chain::new(10, "Optimism"),
    ]
}

/// Modal configuration, serialized as JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModalConfig {
    /// Cloud project id used for explorer requests.
    #[serde(default)]
    pub project_id: String,
    /// Whether the account view (and therefore balance fetching) is enabled.
    #[serde(default = "default_true")]
    pub enable_account_view: bool,
    /// Whether wallet metadata is loaded from the explorer.
    #[serde(default = "default_true")]
    pub enable_explorer: bool,
    /// Explorer API base URL.
    #[serde(default = "default_explorer_api_url")]
    pub explorer_api_url: String,
    /// Custom wallet images keyed by wallet id.
    #[serde(default)]
    pub wallet_images: BTreeMap<String, String>,
    /// Chains the application supports.
    #[serde(default = "default_chains")]
    pub chains: Vec<Chain>,
    /// Id of the chain selected on startup; the first chain when unset.
    #[serde(default)]
    pub default_chain: Option<u64>,
    /// Caller-supplied session URI.
    #[serde(default)]
    pub standalone_uri: Option<String>,
    /// Chain namespaces for standalone mode.
    #[serde(default)]
    pub standalone_chains: Option<Vec<String>>,
    /// Wallets to list instead of the built-in registry.
    #[serde(default)]
    pub wallets: Vec<WalletData>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            enable_account_view: true,
            enable_explorer: true,
            explorer_api_url: default_explorer_api_url(),
            wallet_images: BTreeMap::new(),
            chains: default_chains(),
            default_chain: None,
            standalone_uri: None,
            standalone_chains: None,
            wallets: Vec::new(),
        }
    }
}

impl ModalConfig {
    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        AppPaths::new().config_file()
    }

    /// Loads the configuration from the default location.
    ///
    /// A missing or unreadable file yields the default configuration.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!("Config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, the file cannot be
    /// read, or its JSON cannot be parsed.
    pub fn try_load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined or the file cannot
    /// be written.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The chain to select on startup.
    #[must_use]
    pub fn initial_chain(&self) -> Option<&Chain> {
        self.default_chain
            .and_then(|id| find_chain(&self.chains, id))
            .or_else(|| self.chains.first())
    }
}

// ============================================================================
// ConfigCtrl
// ============================================================================

/// Runtime holder for [`ModalConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConfigCtrl {
    store: Store<ModalConfig>,
}

impl ConfigCtrl {
    /// Creates a controller holding `config`.
    #[must_use]
    pub fn new(config: ModalConfig) -> Self {
        Self {
            store: Store::new(config),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn state(&self) -> ModalConfig {
        self.store.state()
    }

    /// Whether the account view is enabled.
    #[must_use]
    pub fn enable_account_view(&self) -> bool {
        self.store.with(|c| c.enable_account_view)
    }

    /// Custom image configured for `wallet_id`.
    #[must_use]
    pub fn wallet_image(&self, wallet_id: &str) -> Option<String> {
        self.store.with(|c| c.wallet_images.get(wallet_id).cloned())
    }

    /// Replaces the configuration.
    pub fn set_config(&self, config: ModalConfig) {
        self.store.set(config);
    }

    /// Subscribes to configuration changes.
    pub fn subscribe(&self, listener: impl Fn(&ModalConfig) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_default_config() {
        let config = ModalConfig::default();
        assert!(config.enable_account_view);
        assert!(config.enable_explorer);
        assert_eq!(config.chains.len(), 3);
        assert!(config.wallet_images.is_empty());
        assert_eq!(config.explorer_api_url, DEFAULT_EXPLORER_API_URL);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: ModalConfig =
            serde_json::from_str(r#"{"project_id":"abc","enable_account_view":false}"#).unwrap();
        assert_eq!(config.project_id, "abc");
        assert!(!config.enable_account_view);
        assert!(config.enable_explorer);
        assert_eq!(config.chains, default_chains());
    }

    #[test]
    fn test_serialization_roundtrip_with_images() {
        let mut config = ModalConfig::default();
        config
            .wallet_images
            .insert("metamask".to_string(), "https://img/metamask.png".to_string());
        config.standalone_uri = Some("wc:abc@2".to_string());

        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ModalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[rstest]
    #[case::explicit_default(Some(137), Some(137))]
    #[case::unknown_default_falls_back(Some(999), Some(1))]
    #[case::no_default(None, Some(1))]
    fn test_initial_chain(#[case] default_chain: Option<u64>, #[case] expected: Option<u64>) {
        let config = ModalConfig {
            default_chain,
            ..ModalConfig::default()
        };
        assert_eq!(config.initial_chain().map(|c| c.id), expected);
    }

    #[test]
    fn test_initial_chain_without_chains() {
        let config = ModalConfig {
            chains: Vec::new(),
            ..ModalConfig::default()
        };
        assert!(config.initial_chain().is_none());
    }

    #[test]
    fn test_save_to_and_load_from() {
        let path = std::env::temp_dir().join(format!("wcm-modal-config-{}.json", std::process::id()));
        let config = ModalConfig {
            project_id: "p1".to_string(),
            ..ModalConfig::default()
        };
        config.save_to(&path).unwrap();
        let loaded = ModalConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("wcm-modal-does-not-exist.json");
        assert!(ModalConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_config_ctrl_reads_flags() {
        let mut config = ModalConfig::default();
        config.enable_account_view = false;
        config
            .wallet_images
            .insert("w".to_string(), "https://img/w.png".to_string());
        let ctrl = ConfigCtrl::new(config);
        assert!(!ctrl.enable_account_view());
        assert_eq!(ctrl.wallet_image("w").as_deref(), Some("https://img/w.png"));
        assert!(ctrl.wallet_image("other").is_none());
    }
}
