//! Linking dispatcher.
//!
//! Turns a wallet's deep-link template and the authoritative session URI into
//! a link and hands it to the [`Navigator`](crate::state::platform::Navigator),
//! or copies the raw URI when no link applies.
//!
//! The authoritative URI is the standalone URI when one is configured, else
//! the pairing URI of the active connection attempt. Dispatching without
//! either is rejected with [`ModalError::NotConnected`] before any side effect.

use serde::{Deserialize, Serialize};

use crate::constants::{DEEPLINK_CHOICE_KEY, EXPLORER_WALLET_URL, LINK_COPIED_MESSAGE};
use crate::context::ModalContext;
use crate::domain::{ModalError, Result, WalletData};
use crate::routing::ConnectionRoute;
use crate::state::ToastVariant;
use crate::state::platform::{HrefTarget, KeyValueStorage};
use crate::util::{get_error_message, set_recent_wallet};

// ============================================================================
// Link Formatting
// ============================================================================

/// Deep-link choice a returning app resumes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkChoice {
    pub href: String,
    pub name: String,
}

/// A formatted wallet link and the choice to persist alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedLink {
    pub href: String,
    pub choice: DeepLinkChoice,
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn with_trailing_slash(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn finish_link(base: String, uri: &str, name: &str) -> FormattedLink {
    FormattedLink {
        href: format!("{base}wc?uri={}", urlencoding::encode(uri)),
        choice: DeepLinkChoice {
            href: base,
            name: name.to_string(),
        },
    }
}

/// Formats a native (custom scheme) wallet link.
///
/// `http(s)` templates are formatted as universal links. A template without
/// `://` is reduced to its scheme, so `trust`, `trust:` and `trust/` all
/// become `trust://`.
#[must_use]
pub fn format_native_url(app_url: &str, uri: &str, name: &str) -> FormattedLink {
    if is_http_url(app_url) {
        return format_universal_url(app_url, uri, name);
    }

    let base = if app_url.contains("://") {
        app_url.to_string()
    } else {
        format!("{}://", app_url.replace(['/', ':'], ""))
    };
    finish_link(with_trailing_slash(base), uri, name)
}

/// Formats a universal (`https`) wallet link.
///
/// Non-`http(s)` templates are formatted as native links.
#[must_use]
pub fn format_universal_url(app_url: &str, uri: &str, name: &str) -> FormattedLink {
    if !is_http_url(app_url) {
        return format_native_url(app_url, uri, name);
    }
    finish_link(with_trailing_slash(app_url.to_string()), uri, name)
}

// ============================================================================
// Deep-Link Choice Persistence
// ============================================================================

/// Persists `choice`.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn set_deep_link_choice(storage: &dyn KeyValueStorage, choice: &DeepLinkChoice) -> Result<()> {
    storage.set_item(DEEPLINK_CHOICE_KEY, &serde_json::to_string(choice)?)
}

/// The persisted deep-link choice.
///
/// # Errors
///
/// Returns an error if storage cannot be read or the stored JSON is malformed.
pub fn get_deep_link_choice(storage: &dyn KeyValueStorage) -> Result<Option<DeepLinkChoice>> {
    storage
        .get_item(DEEPLINK_CHOICE_KEY)?
        .map(|json| serde_json::from_str(&json).map_err(ModalError::from))
        .transpose()
}

/// Persists the Android resume marker: the part of `uri` before `?`.
///
/// # Errors
///
/// Returns an error if the storage write fails.
pub fn set_android_deep_link(storage: &dyn KeyValueStorage, uri: &str) -> Result<()> {
    let href = uri.split('?').next().unwrap_or(uri);
    set_deep_link_choice(
        storage,
        &DeepLinkChoice {
            href: href.to_string(),
            name: "Android".to_string(),
        },
    )
}

// ============================================================================
// Dispatch
// ============================================================================

/// What a dispatch did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Opened this link.
    Opened(String),
    /// Copied the session URI.
    Copied,
    /// The wallet had no link for this transport.
    Skipped,
}

/// The standalone URI if configured, else the pairing URI.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] when neither exists.
pub fn authoritative_uri(ctx: &ModalContext) -> Result<String> {
    ctx.options
        .state()
        .standalone_uri
        .or_else(|| ctx.connection.state().pairing_uri)
        .ok_or(ModalError::NotConnected)
}

fn redirect(ctx: &ModalContext, link: Option<FormattedLink>, target: HrefTarget) -> Result<LinkOutcome> {
    let Some(link) = link else {
        return Ok(LinkOutcome::Skipped);
    };
    set_deep_link_choice(ctx.storage(), &link.choice)?;
    ctx.navigator().open_href(&link.href, target)?;
    Ok(LinkOutcome::Opened(link.href))
}

/// Opens `wallet`'s mobile app in place.
///
/// The native template is preferred over the universal one. The wallet is
/// stored as the recent wallet even when it has no mobile link.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] without a session URI, or the storage
/// or navigator error.
pub fn handle_mobile_linking(ctx: &ModalContext, wallet: &WalletData) -> Result<LinkOutcome> {
    let uri = authoritative_uri(ctx)?;
    set_recent_wallet(ctx.storage(), wallet)?;

    let link = match (wallet.mobile_native(), wallet.mobile_universal()) {
        (Some(native), _) => Some(format_native_url(native, &uri, &wallet.name)),
        (None, Some(universal)) => Some(format_universal_url(universal, &uri, &wallet.name)),
        (None, None) => None,
    };
    redirect(ctx, link, HrefTarget::SameContext)
}

/// Hands the raw session URI to Android's intent resolver in place.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] without a session URI, or the storage
/// or navigator error.
pub fn handle_android_linking(ctx: &ModalContext) -> Result<LinkOutcome> {
    let uri = authoritative_uri(ctx)?;
    set_android_deep_link(ctx.storage(), &uri)?;
    ctx.navigator().open_href(&uri, HrefTarget::SameContext)?;
    Ok(LinkOutcome::Opened(uri))
}

/// Opens `wallet`'s desktop app in place through its native template.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] without a session URI, or the storage
/// or navigator error.
pub fn handle_desktop_linking(ctx: &ModalContext, wallet: &WalletData) -> Result<LinkOutcome> {
    let uri = authoritative_uri(ctx)?;
    set_recent_wallet(ctx.storage(), wallet)?;

    let link = wallet
        .desktop_native()
        .map(|native| format_native_url(native, &uri, &wallet.name));
    redirect(ctx, link, HrefTarget::SameContext)
}

/// Opens `wallet`'s web wallet in a new context through its universal template.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] without a session URI, or the storage
/// or navigator error.
pub fn handle_web_linking(ctx: &ModalContext, wallet: &WalletData) -> Result<LinkOutcome> {
    let uri = authoritative_uri(ctx)?;
    set_recent_wallet(ctx.storage(), wallet)?;

    let link = wallet
        .desktop_universal()
        .map(|universal| format_universal_url(universal, &uri, &wallet.name));
    redirect(ctx, link, HrefTarget::NewContext)
}

/// Copies the session URI and confirms with a success toast.
///
/// # Errors
///
/// Returns [`ModalError::NotConnected`] without a session URI. Clipboard
/// failures are returned as-is and no toast is shown.
pub fn handle_uri_copy(ctx: &ModalContext) -> Result<LinkOutcome> {
    let uri = authoritative_uri(ctx)?;
    ctx.clipboard().write_text(&uri)?;
    ctx.toast.open_toast(LINK_COPIED_MESSAGE, ToastVariant::Success);
    Ok(LinkOutcome::Copied)
}

/// Opens the public wallet explorer in a new context.
///
/// # Errors
///
/// Returns the navigator error.
pub fn open_wallet_explorer_url(ctx: &ModalContext) -> Result<()> {
    ctx.navigator().open_href(EXPLORER_WALLET_URL, HrefTarget::NewContext)
}

/// Runs the transport belonging to `route` for `wallet`.
///
/// # Errors
///
/// Returns the error of the transport that ran.
pub fn dispatch_for_route(ctx: &ModalContext, route: ConnectionRoute, wallet: &WalletData) -> Result<LinkOutcome> {
    match route {
        ConnectionRoute::MobileConnecting if ctx.device().is_android() => {
            let outcome = handle_android_linking(ctx)?;
            set_recent_wallet(ctx.storage(), wallet)?;
            Ok(outcome)
        }
        ConnectionRoute::MobileConnecting => handle_mobile_linking(ctx, wallet),
        ConnectionRoute::DesktopConnecting => handle_desktop_linking(ctx, wallet),
        ConnectionRoute::WebConnecting => handle_web_linking(ctx, wallet),
        ConnectionRoute::MobileQrcodeConnecting => {
            let outcome = handle_uri_copy(ctx)?;
            set_recent_wallet(ctx.storage(), wallet)?;
            Ok(outcome)
        }
        ConnectionRoute::InstallWallet => {
            open_wallet_explorer_url(ctx)?;
            Ok(LinkOutcome::Opened(EXPLORER_WALLET_URL.to_string()))
        }
    }
}

// ============================================================================
// Connector Connection
// ============================================================================

/// Connects through `connector_id` on the selected chain and closes the modal.
///
/// Failures are logged and then passed to `on_error` when given; otherwise
/// one error toast is shown. They are never returned.
///
/// # Returns
///
/// `true` if the connection succeeded.
pub async fn handle_connector_connection(
    ctx: &ModalContext,
    connector_id: &str,
    on_error: Option<&(dyn Fn() + Sync)>,
) -> bool {
    let chain_id = ctx.options.get_selected_chain().map(|c| c.id);

    match ctx.client().connect_connector(connector_id, chain_id).await {
        Ok(()) => {
            tracing::info!(connector_id, ?chain_id, "connector connected");
            ctx.modal.close();
            true
        }
        Err(err) => {
            tracing::error!(connector_id, "connector connection failed: {err}");
            match on_error {
                Some(on_error) => on_error(),
                None => ctx.toast.open_toast(get_error_message(&err), ToastVariant::Error),
            }
            false
        }
    }
}
