//! Application constants for the wallet connection modal.
//!
//! Storage keys, external URLs, timing values and user-facing strings that
//! more than one module depends on live here.

use std::time::Duration;

// ============================================================================
// Layout
// ============================================================================

/// Widths at or below this are treated as a mobile layout.
pub const MOBILE_BREAKPOINT: u16 = 600;

// ============================================================================
// Storage Keys
// ============================================================================

/// Storage key of the most recently used wallet.
pub const RECENT_WALLET_KEY: &str = "WCM_RECENT_WALLET_DATA";

/// Storage key of the deep-link choice a returning app resumes from.
pub const DEEPLINK_CHOICE_KEY: &str = "WALLETCONNECT_DEEPLINK_CHOICE";

// ============================================================================
// URLs
// ============================================================================

/// Public wallet explorer listing.
pub const EXPLORER_WALLET_URL: &str = "https://explorer.walletconnect.com/?type=wallet";

/// Default explorer API base URL.
pub const DEFAULT_EXPLORER_API_URL: &str = "https://explorer-api.walletconnect.com";

// ============================================================================
// Timing
// ============================================================================

/// How long an image preload may take before it is abandoned.
pub const PRELOAD_TIMEOUT: Duration = Duration::from_millis(3_000);

/// Default trailing-edge debounce delay.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Tick rate of the terminal front-end.
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Formatting
// ============================================================================

/// Default length threshold for [`crate::util::truncate`].
pub const DEFAULT_TRUNCATE_LEN: usize = 8;

/// Maximum number of avatar colors derived from an address.
pub const AVATAR_COLOR_COUNT: usize = 5;

// ============================================================================
// Labels
// ============================================================================

/// Event name recorded when the network switch is clicked.
pub const NETWORK_BUTTON_EVENT: &str = "NETWORK_BUTTON";

/// Network switch label when the wallet is on an unsupported chain.
pub const WRONG_NETWORK_LABEL: &str = "Wrong Network";

/// Network switch label when no chain is selected.
pub const SELECT_NETWORK_LABEL: &str = "Select Network";

/// Balance placeholder while no balance is known.
pub const BALANCE_PLACEHOLDER: &str = "_._";

/// Toast shown after the session URI has been copied.
pub const LINK_COPIED_MESSAGE: &str = "Link copied";

/// Fallback text for errors without a message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown Error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_constants() {
        assert_eq!(PRELOAD_TIMEOUT.as_millis(), 3_000);
        assert_eq!(DEBOUNCE_DELAY.as_millis(), 500);
        assert!(TICK_RATE < DEBOUNCE_DELAY);
    }
}
