//! Shared modal state.
//!
//! Every controller wraps a [`store::Store`] and is the only way to write
//! its slice of state:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         ModalContext                          │
//! ├────────────┬────────────┬────────────┬────────────┬───────────┤
//! │ OptionsCtrl│ AccountCtrl│ RouterCtrl │ ModalCtrl  │ ToastCtrl │
//! │ - chain    │ - address  │ - view     │ - open     │ - message │
//! │ - chains   │ - balance  │ - history  │            │ - variant │
//! │ - uri      │            │ - data     │            │           │
//! ├────────────┴─────┬──────┴────────────┴──┬─────────┴───────────┤
//! │ WcConnectionCtrl │      EventsCtrl      │     ConfigCtrl      │
//! │ - pairing uri    │      - clicks        │     - flags         │
//! └──────────────────┴──────────────────────┴─────────────────────┘
//! ```

pub mod account;
pub mod config;
pub mod connection;
pub mod events;
pub mod modal;
pub mod options;
pub mod platform;
pub mod router;
pub mod store;
pub mod toast;

pub use account::{AccountCtrl, AccountState};
pub use config::{ConfigCtrl, ModalConfig};
pub use connection::{ConnectionState, WcConnectionCtrl};
pub use events::{EventKind, EventsCtrl, ModalEvent};
pub use modal::{ModalCtrl, ModalState};
pub use options::{OptionsCtrl, OptionsState};
pub use router::{RouterCtrl, RouterState};
pub use store::{Store, Subscription};
pub use toast::{ToastCtrl, ToastState, ToastVariant};
