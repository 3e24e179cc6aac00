//! Modal routes.

use serde::{Deserialize, Serialize};

use super::WalletData;

/// Views the modal router can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RouterView {
    /// Wallet list, the modal's landing view.
    #[default]
    ConnectWallet,
    /// Connected account summary.
    Account,
    /// Network picker.
    SelectNetwork,
    /// Full wallet explorer listing.
    WalletExplorer,
    /// Pairing QR code.
    Qrcode,
    /// Help and onboarding.
    Help,
    /// Wallet download suggestions.
    GetWallet,
    /// Connecting through the wallet's mobile app.
    MobileConnecting,
    /// Connecting through the wallet's universal (web) link.
    WebConnecting,
    /// Connecting through the wallet's desktop app.
    DesktopConnecting,
    /// Showing a QR code for a mobile-only wallet on desktop.
    MobileQrcodeConnecting,
    /// No usable transport; suggest installing the wallet.
    InstallWallet,
}

impl RouterView {
    /// Display title for the view.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ConnectWallet => "Connect your wallet",
            Self::Account => "Account",
            Self::SelectNetwork => "Select network",
            Self::WalletExplorer => "Wallets",
            Self::Qrcode => "Scan with your wallet",
            Self::Help => "What is a wallet?",
            Self::GetWallet => "Get a wallet",
            Self::MobileConnecting => "Continue in mobile app",
            Self::WebConnecting => "Continue in browser",
            Self::DesktopConnecting => "Continue in desktop app",
            Self::MobileQrcodeConnecting => "Scan with your phone",
            Self::InstallWallet => "Install wallet",
        }
    }
}

impl std::fmt::Display for RouterView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Data attached to the current route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouterData {
    /// Wallet the user picked, if any.
    pub wallet: Option<WalletData>,
}

impl RouterData {
    /// Route data carrying a wallet.
    #[must_use]
    pub fn wallet(wallet: WalletData) -> Self {
        Self {
            wallet: Some(wallet),
        }
    }
}
