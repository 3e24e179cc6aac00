//! Error types for modal operations.
//!
//! Failures are split into the ones surfaced to the user as a toast
//! (client and connection failures) and the ones propagated to the caller
//! untouched (clipboard, storage, malformed stored JSON).

use thiserror::Error;

use crate::state::platform::clipboard::ClipboardError;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for everything the modal layer can fail at.
#[derive(Debug, Error)]
pub enum ModalError {
    /// Failure reported by the wallet-connection client.
    #[error("{0}")]
    Client(String),

    /// Neither a standalone nor a pairing URI is available yet.
    #[error("Connection not established: no standalone or pairing URI available")]
    NotConnected,

    /// A button component was created while the modal runs standalone.
    #[error("Wallet Connect button components are not available in standalone mode.")]
    StandaloneMode,

    /// Clipboard write failed.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Persistent storage I/O failed.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored or configured JSON could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request failed.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Opening a link in the browser or wallet app failed.
    #[error("Failed to open '{href}': {message}")]
    Open {
        /// The link that was being opened.
        href: String,
        /// Platform error message.
        message: String,
    },

    /// No async runtime to run background work on.
    #[error("Async runtime unavailable: {0}")]
    Runtime(String),

    /// Invalid user or configuration input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ModalError {
    /// Create a client error with the given message.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client(message.into())
    }

    /// Create an open error for `href`.
    #[must_use]
    pub fn open(href: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Open {
            href: href.into(),
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Convert to a `color_eyre::Report` for the binary's error handling.
    #[must_use = "this converts the error into a Report for display"]
    pub fn into_report(self) -> color_eyre::Report {
        color_eyre::eyre::eyre!("{}", self)
    }
}

/// Result alias for modal operations.
pub type Result<T> = std::result::Result<T, ModalError>;

// ============================================================================
// Tests
// ============================================================================
