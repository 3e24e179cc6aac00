//! Wallet connection modal.
//!
//! Shared controllers for a wallet-connection modal, the synchronizer that
//! keeps the selected chain aligned with the wallet, the router that picks a
//! connecting view per wallet, and the deep-link dispatcher. A terminal
//! front-end drives them against an in-process wallet client.
//!
//! - [`state`] - Observable controllers and platform services
//! - [`context`] - Explicit bundle of controllers and services
//! - [`client`] - Wallet-connection client seam and the explorer client
//! - [`network_context`] - Network synchronizer
//! - [`routing`] - Connection router
//! - [`linking`] - Deep-link dispatcher
//! - [`ui`] - ratatui components and screen

pub mod app;
pub mod client;
pub mod constants;
pub mod context;
pub mod domain;
pub mod event;
pub mod handler;
pub mod linking;
pub mod logging;
pub mod network_context;
pub mod routing;
pub mod state;
pub mod theme;
pub mod tui;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
