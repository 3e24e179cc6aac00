//! Domain types for the wallet connection modal.
//!
//! - [`chain`] - Chain identity and membership checks
//! - [`wallet`] - Wallet registry data and deep-link templates
//! - [`route`] - Router views and route data
//! - [`account`] - Account balance
//! - [`error`] - The modal error type

pub mod account;
pub mod chain;
pub mod error;
pub mod route;
pub mod wallet;

pub use account::Balance;
pub use chain::{Chain, find_chain, is_known_chain};
pub use error::{ModalError, Result};
pub use route::{RouterData, RouterView};
pub use wallet::{WalletData, WalletLinks};
