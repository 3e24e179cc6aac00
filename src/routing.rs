//! Connection router.
//!
//! Picks the connecting view for a wallet from the device class and the
//! wallet's deep-link capabilities:
//!
//! ```text
//! mobile device ── mobile capable ──────────────▶ MobileConnecting
//!               ├─ web capable ─────────────────▶ WebConnecting
//!               └─ otherwise ───────────────────▶ InstallWallet
//! desktop ─────── desktop capable ──────────────▶ DesktopConnecting
//!               ├─ web capable ─────────────────▶ WebConnecting
//!               ├─ mobile capable ──────────────▶ MobileQrcodeConnecting
//!               └─ otherwise ───────────────────▶ InstallWallet
//! ```

use crate::context::ModalContext;
use crate::domain::{RouterData, RouterView, WalletData};
use crate::state::RouterCtrl;

// ============================================================================
// Capabilities
// ============================================================================

/// Deep-link capabilities of a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalletPlatforms {
    /// Exposes a desktop native link.
    pub is_desktop: bool,
    /// Exposes a desktop universal link.
    pub is_web: bool,
    /// Exposes a mobile native or universal link.
    pub is_mobile: bool,
}

impl WalletPlatforms {
    #[must_use]
    pub fn from_wallet(wallet: &WalletData) -> Self {
        Self {
            is_desktop: wallet.desktop_native().is_some(),
            is_web: wallet.desktop_universal().is_some(),
            is_mobile: wallet.mobile_native().is_some() || wallet.mobile_universal().is_some(),
        }
    }

    /// Capabilities of the wallet held in the router data; all `false` without one.
    #[must_use]
    pub fn from_router(router: &RouterCtrl) -> Self {
        router
            .state()
            .data
            .and_then(|data| data.wallet)
            .map(|wallet| Self::from_wallet(&wallet))
            .unwrap_or_default()
    }
}

// ============================================================================
// Decision
// ============================================================================

/// Connecting view chosen for a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionRoute {
    MobileConnecting,
    WebConnecting,
    InstallWallet,
    DesktopConnecting,
    MobileQrcodeConnecting,
}

impl ConnectionRoute {
    /// Decides the route. Total: every input maps to exactly one route.
    #[must_use]
    pub const fn decide(is_mobile_device: bool, platforms: WalletPlatforms) -> Self {
        if is_mobile_device {
            if platforms.is_mobile {
                Self::MobileConnecting
            } else if platforms.is_web {
                Self::WebConnecting
            } else {
                Self::InstallWallet
            }
        } else if platforms.is_desktop {
            Self::DesktopConnecting
        } else if platforms.is_web {
            Self::WebConnecting
        } else if platforms.is_mobile {
            Self::MobileQrcodeConnecting
        } else {
            Self::InstallWallet
        }
    }

    /// Router view for this route.
    #[must_use]
    pub const fn view(self) -> RouterView {
        match self {
            Self::MobileConnecting => RouterView::MobileConnecting,
            Self::WebConnecting => RouterView::WebConnecting,
            Self::InstallWallet => RouterView::InstallWallet,
            Self::DesktopConnecting => RouterView::DesktopConnecting,
            Self::MobileQrcodeConnecting => RouterView::MobileQrcodeConnecting,
        }
    }
}

/// Records `wallet` in the router data, then pushes its connecting view.
pub fn goto_connecting_view(ctx: &ModalContext, wallet: WalletData) -> ConnectionRoute {
    ctx.router.set_data(RouterData::wallet(wallet));

    let platforms = WalletPlatforms::from_router(&ctx.router);
    let route = ConnectionRoute::decide(ctx.device().is_mobile(), platforms);
    tracing::debug!(?route, ?platforms, "routing to connecting view");

    ctx.router.push(route.view());
    route
}
