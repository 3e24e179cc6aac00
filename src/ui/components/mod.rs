//! Modal components.
//!
//! - [`network_switch`] - Selected-chain button opening the network picker
//! - [`account_balance`] - Balance of the connected account
//! - [`toast`] - Toast notification overlay
//!
//! Stateful components subscribe to their controllers on construction and
//! unsubscribe when dropped.

pub mod account_balance;
pub mod network_switch;
pub mod toast;

pub use account_balance::AccountBalance;
pub use network_switch::{NetworkSwitch, NetworkSwitchView};
pub use toast::render_toast;
