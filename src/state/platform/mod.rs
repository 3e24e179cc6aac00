//! Platform services the modal reaches outside the process for.
//!
//! - [`clipboard`] - System clipboard
//! - [`paths`] - Configuration and data directory paths
//! - [`storage`] - Persistent key-value storage
//!
//! This module also defines the device class the modal runs on and the
//! [`Navigator`] used to hand links to the browser or a wallet app.

pub mod clipboard;
pub mod paths;
pub mod storage;

pub use clipboard::{Clipboard, ClipboardError, ClipboardManager};
pub use paths::AppPaths;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};

use crate::domain::{ModalError, Result};

// ============================================================================
// Device
// ============================================================================

/// Device class the modal is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    /// Desktop or laptop.
    #[default]
    Desktop,
    /// Non-Android phone or tablet.
    Mobile,
    /// Android phone or tablet.
    Android,
}

impl Device {
    /// Returns `true` for any mobile device.
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile | Self::Android)
    }

    /// Returns `true` on Android.
    #[must_use]
    pub const fn is_android(self) -> bool {
        matches!(self, Self::Android)
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Where a link is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HrefTarget {
    /// Replace the current context (`_self`).
    SameContext,
    /// Open a new window or tab (`_blank`).
    NewContext,
}

impl HrefTarget {
    /// Browser target name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SameContext => "_self",
            Self::NewContext => "_blank",
        }
    }
}

/// Hands links to the browser or to the wallet app registered for a scheme.
pub trait Navigator: Send + Sync {
    /// Opens `href`.
    ///
    /// # Errors
    ///
    /// Returns an error if no handler accepted the link.
    fn open_href(&self, href: &str, target: HrefTarget) -> Result<()>;
}

/// Navigator using the operating system's URL handlers.
///
/// Both targets behave the same: the OS decides whether a new window opens.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemNavigator;

impl Navigator for SystemNavigator {
    fn open_href(&self, href: &str, target: HrefTarget) -> Result<()> {
        tracing::info!(href, target = target.as_str(), "opening link");
        open::that(href).map_err(|e| ModalError::open(href, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_classes() {
        assert!(!Device::Desktop.is_mobile());
        assert!(Device::Mobile.is_mobile());
        assert!(Device::Android.is_mobile());
        assert!(Device::Android.is_android());
        assert!(!Device::Mobile.is_android());
        assert_eq!(Device::default(), Device::Desktop);
    }

    #[test]
    fn test_href_target_names() {
        assert_eq!(HrefTarget::SameContext.as_str(), "_self");
        assert_eq!(HrefTarget::NewContext.as_str(), "_blank");
    }
}
