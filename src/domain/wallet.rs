//! Wallet registry metadata and deep-link templates.

use serde::{Deserialize, Serialize};

// ============================================================================
// Wallet Links
// ============================================================================

/// Deep-link templates a wallet exposes for one platform.
///
/// `native` is an app scheme (`metamask://`), `universal` an HTTPS link
/// (`https://metamask.app.link`). Empty strings count as absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletLinks {
    /// Native app scheme template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native: Option<String>,
    /// Universal (HTTPS) link template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub universal: Option<String>,
}

impl WalletLinks {
    /// Creates links with only a native template.
    #[must_use]
    pub fn native(url: impl Into<String>) -> Self {
        Self {
            native: Some(url.into()),
            universal: None,
        }
    }

    /// Creates links with only a universal template.
    #[must_use]
    pub fn universal(url: impl Into<String>) -> Self {
        Self {
            native: None,
            universal: Some(url.into()),
        }
    }

    /// Adds a universal template.
    #[must_use]
    pub fn with_universal(mut self, url: impl Into<String>) -> Self {
        self.universal = Some(url.into());
        self
    }

    /// The native template, if present and non-empty.
    #[must_use]
    pub fn native_link(&self) -> Option<&str> {
        self.native.as_deref().filter(|s| !s.is_empty())
    }

    /// The universal template, if present and non-empty.
    #[must_use]
    pub fn universal_link(&self) -> Option<&str> {
        self.universal.as_deref().filter(|s| !s.is_empty())
    }
}

// ============================================================================
// Wallet Data
// ============================================================================

/// A connectable wallet as listed by the wallet registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletData {
    /// Registry id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Explorer image id used to resolve the wallet icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Mobile deep-link templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<WalletLinks>,
    /// Desktop deep-link templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop: Option<WalletLinks>,
}

impl WalletData {
    /// Creates a wallet without links or image.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_id: None,
            mobile: None,
            desktop: None,
        }
    }

    /// Sets the explorer image id.
    #[must_use]
    pub fn with_image_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }

    /// Sets the mobile links.
    #[must_use]
    pub fn with_mobile(mut self, links: WalletLinks) -> Self {
        self.mobile = Some(links);
        self
    }

    /// Sets the desktop links.
    #[must_use]
    pub fn with_desktop(mut self, links: WalletLinks) -> Self {
        self.desktop = Some(links);
        self
    }

    /// Mobile native template.
    #[must_use]
    pub fn mobile_native(&self) -> Option<&str> {
        self.mobile.as_ref().and_then(WalletLinks::native_link)
    }

    /// Mobile universal template.
    #[must_use]
    pub fn mobile_universal(&self) -> Option<&str> {
        self.mobile.as_ref().and_then(WalletLinks::universal_link)
    }

    /// Desktop native template.
    #[must_use]
    pub fn desktop_native(&self) -> Option<&str> {
        self.desktop.as_ref().and_then(WalletLinks::native_link)
    }

    /// Desktop universal template.
    #[must_use]
    pub fn desktop_universal(&self) -> Option<&str> {
        self.desktop.as_ref().and_then(WalletLinks::universal_link)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_templates_are_absent() {
        let wallet = WalletData::new("w", "Wallet").with_mobile(WalletLinks {
            native: Some(String::new()),
            universal: Some("https://w.app".to_string()),
        });
        assert_eq!(wallet.mobile_native(), None);
        assert_eq!(wallet.mobile_universal(), Some("https://w.app"));
        assert_eq!(wallet.desktop_native(), None);
    }

    #[test]
    fn test_registry_json_without_optional_fields() {
        let wallet: WalletData =
            serde_json::from_str(r#"{"id":"abc","name":"Abc Wallet"}"#).unwrap();
        assert_eq!(wallet, WalletData::new("abc", "Abc Wallet"));
    }

    #[test]
    fn test_serialization_skips_missing_links() {
        let wallet = WalletData::new("abc", "Abc").with_desktop(WalletLinks::native("abc://"));
        let json = serde_json::to_string(&wallet).unwrap();
        assert!(!json.contains("mobile"));
        assert!(!json.contains("universal"));
        assert!(json.contains(r#""native":"abc://""#));
    }
}
