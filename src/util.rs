//! UI helpers shared by the modal components.
//!
//! Wallet name and icon lookup, string helpers, avatar colors, image
//! preloading, debouncing and recent-wallet persistence.

use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::constants::{
    AVATAR_COLOR_COUNT, DEBOUNCE_DELAY, MOBILE_BREAKPOINT, PRELOAD_TIMEOUT, RECENT_WALLET_KEY,
    UNKNOWN_ERROR_MESSAGE,
};
use crate::context::ModalContext;
use crate::domain::{ModalError, Result, WalletData};
use crate::state::platform::KeyValueStorage;

// ============================================================================
// Strings
// ============================================================================

/// Shortens `value` to its first and last four characters around `...`.
///
/// Values of at most `len` characters are returned unchanged.
#[must_use]
pub fn truncate(value: &str, len: usize) -> String {
    let count = value.chars().count();
    if count <= len {
        return value.to_string();
    }

    let head: String = value.chars().take(4).collect();
    let tail: String = value.chars().skip(count.saturating_sub(4)).collect();
    format!("{head}...{tail}")
}

/// Wallet display name; the first word only when `short`.
#[must_use]
pub fn get_wallet_name(name: &str, short: bool) -> &str {
    if short {
        name.split(' ').next().unwrap_or(name)
    } else {
        name
    }
}

/// Case-insensitive substring test.
#[must_use]
pub fn case_safe_includes(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

/// User-facing message for `err`, or `"Unknown Error"` when it has none.
#[must_use]
pub fn get_error_message<E: fmt::Display + ?Sized>(err: &E) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_ERROR_MESSAGE.to_string()
    } else {
        message
    }
}

/// Whether a viewport `width` wide uses the mobile layout.
#[must_use]
pub const fn is_mobile_animation(width: u16) -> bool {
    width <= MOBILE_BREAKPOINT
}

// ============================================================================
// Wallet Images
// ============================================================================

/// Icon URL for `wallet`: a configured image, else the explorer image, else empty.
#[must_use]
pub fn get_wallet_icon(ctx: &ModalContext, wallet: &WalletData) -> String {
    if let Some(image) = ctx.config.wallet_image(&wallet.id) {
        return image;
    }
    match wallet.image_id.as_deref() {
        Some(image_id) => ctx.explorer().wallet_image_url(image_id),
        None => String::new(),
    }
}

/// Every configured custom wallet image URL.
#[must_use]
pub fn get_custom_image_urls(ctx: &ModalContext) -> Vec<String> {
    ctx.config.state().wallet_images.into_values().collect()
}

/// Result of [`preload_image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadOutcome {
    /// The image loaded in time.
    Loaded,
    /// The load outlived the timeout. The request itself is not cancelled.
    Abandoned,
}

/// Loads `src` so later displays are served from cache, giving up after three seconds.
///
/// # Errors
///
/// Returns the loader's error if the image fails before the timeout.
pub async fn preload_image(ctx: &ModalContext, src: &str) -> Result<PreloadOutcome> {
    match tokio::time::timeout(PRELOAD_TIMEOUT, ctx.image_loader().load(src)).await {
        Ok(Ok(())) => Ok(PreloadOutcome::Loaded),
        Ok(Err(err)) => Err(err),
        Err(_) => {
            tracing::warn!(src, "image preload timed out");
            Ok(PreloadOutcome::Abandoned)
        }
    }
}

// ============================================================================
// Avatar Colors
// ============================================================================

/// A derived avatar color and the theme variable it is assigned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarColor {
    /// Theme variable name, `--wcm-color-av-1` to `--wcm-color-av-5`.
    pub variable: String,
    /// CSS color, `rgb(r, g, b)`.
    pub rgb: String,
}

/// Derives up to five avatar colors from `address`.
///
/// The address is split into seeds of seven UTF-16 code units; each seed is
/// hashed with 32-bit wrapping arithmetic and its low three bytes become the
/// red, green and blue channels.
#[must_use]
pub fn generate_avatar_colors(address: &str) -> Vec<AvatarColor> {
    let units: Vec<u16> = address.encode_utf16().collect();

    units
        .chunks(7)
        .take(AVATAR_COLOR_COUNT)
        .enumerate()
        .map(|(i, seed)| {
            let hash = seed.iter().fold(0_i32, |hash, &unit| {
                i32::from(unit).wrapping_add((hash << 5).wrapping_sub(hash))
            });
            let [r, g, b] = [0, 8, 16].map(|shift| (hash >> shift) & 255);
            AvatarColor {
                variable: format!("--wcm-color-av-{}", i + 1),
                rgb: format!("rgb({r}, {g}, {b})"),
            }
        })
        .collect()
}

// ============================================================================
// Debounce
// ============================================================================

/// Trailing-edge debouncer: only the last call within the delay runs.
///
/// Pending calls are cancelled when the debouncer is dropped.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    /// Debouncer with the default 500 ms delay on the current runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Runtime`] outside a tokio runtime.
    pub fn new() -> Result<Self> {
        Self::with_delay(DEBOUNCE_DELAY)
    }

    /// Debouncer with a custom delay on the current runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ModalError::Runtime`] outside a tokio runtime.
    pub fn with_delay(delay: Duration) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| ModalError::Runtime(e.to_string()))?;
        Ok(Self {
            delay,
            runtime,
            pending: Mutex::new(None),
        })
    }

    /// Schedules `f`, replacing any call still waiting.
    pub fn call(&self, f: impl FnOnce() + Send + 'static) {
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        });
        if let Some(previous) = self.pending.lock().replace(task) {
            previous.abort();
        }
    }

    /// Drops the waiting call, if any.
    pub fn cancel(&self) {
        if let Some(task) = self.pending.lock().take() {
            task.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// Guards
// ============================================================================

/// Fails when the modal runs in standalone mode, where button components are unavailable.
///
/// # Errors
///
/// Returns [`ModalError::StandaloneMode`] in standalone mode.
pub fn reject_standalone_button_component(ctx: &ModalContext) -> Result<()> {
    if ctx.options.state().is_standalone {
        return Err(ModalError::StandaloneMode);
    }
    Ok(())
}

// ============================================================================
// Recent Wallet
// ============================================================================

/// Persists `wallet` as the most recently used one.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn set_recent_wallet(storage: &dyn KeyValueStorage, wallet: &WalletData) -> Result<()> {
    let json = serde_json::to_string(wallet)?;
    storage.set_item(RECENT_WALLET_KEY, &json)
}

/// The most recently used wallet, if one was stored.
///
/// # Errors
///
/// Returns an error if storage cannot be read or the stored JSON is malformed.
pub fn get_recent_wallet(storage: &dyn KeyValueStorage) -> Result<Option<WalletData>> {
    let Some(json) = storage.get_item(RECENT_WALLET_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&json)?))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ModalConfig;
    use crate::state::platform::{Device, MemoryStorage};
    use crate::test_utils::{ScriptedImageLoader, TestHarness, WalletMother};
    use rstest::*;
    use std::sync::Arc;

    #[rstest]
    #[case::spec_example("abcdefghij", 8, "abcd...ghij")]
    #[case::at_threshold("abcdefgh", 8, "abcdefgh")]
    #[case::short("abc", 8, "abc")]
    #[case::empty("", 8, "")]
    #[case::address("0x1234567890abcdef", 8, "0x12...cdef")]
    #[case::custom_len("abcdefghij", 10, "abcdefghij")]
    #[case::multibyte("ééééééééé", 8, "éééé...éééé")]
    fn test_truncate(#[case] value: &str, #[case] len: usize, #[case] expected: &str) {
        assert_eq!(truncate(value, len), expected);
    }

    #[rstest]
    #[case("Rainbow Wallet", false, "Rainbow Wallet")]
    #[case("Rainbow Wallet", true, "Rainbow")]
    #[case("Zerion", true, "Zerion")]
    #[case("", true, "")]
    fn test_get_wallet_name(#[case] name: &str, #[case] short: bool, #[case] expected: &str) {
        assert_eq!(get_wallet_name(name, short), expected);
    }

    #[test]
    fn test_case_safe_includes() {
        assert!(case_safe_includes("MetaMask", "meta"));
        assert!(case_safe_includes("metamask", "MASK"));
        assert!(!case_safe_includes("Rainbow", "zerion"));
    }

    #[test]
    fn test_get_error_message() {
        assert_eq!(get_error_message(&ModalError::client("rpc down")), "rpc down");
        assert_eq!(get_error_message(&ModalError::client("")), "Unknown Error");
    }

    #[rstest]
    #[case(320, true)]
    #[case(600, true)]
    #[case(601, false)]
    fn test_is_mobile_animation(#[case] width: u16, #[case] expected: bool) {
        assert_eq!(is_mobile_animation(width), expected);
    }

    #[test]
    fn test_wallet_icon_prefers_configured_image() {
        let mut config = ModalConfig {
            project_id: "proj".to_string(),
            ..ModalConfig::default()
        };
        config
            .wallet_images
            .insert("rainbow".to_string(), "https://img/rainbow.png".to_string());
        let harness = TestHarness::new(config, Device::Desktop);

        assert_eq!(
            get_wallet_icon(&harness.ctx, &WalletMother::everywhere()),
            "https://img/rainbow.png"
        );
        insta::assert_snapshot!(
            get_wallet_icon(&harness.ctx, &WalletData::new("other", "Other").with_image_id("img-9")),
            @"https://explorer-api.walletconnect.com/w3m/v1/getWalletImage/img-9?projectId=proj"
        );
        assert_eq!(get_wallet_icon(&harness.ctx, &WalletMother::bare()), "");
        assert_eq!(
            get_custom_image_urls(&harness.ctx),
            vec!["https://img/rainbow.png".to_string()]
        );
    }

    #[test]
    fn test_avatar_colors() {
        let colors = generate_avatar_colors("0x1234567890abcdef1234567890abcdef12345678");
        let rendered: Vec<String> = colors
            .iter()
            .map(|c| format!("{}: {}", c.variable, c.rgb))
            .collect();

        insta::assert_snapshot!(rendered.join("\n"), @r"
        --wcm-color-av-1: rgb(235, 166, 186)
        --wcm-color-av-2: rgb(143, 215, 154)
        --wcm-color-av-3: rgb(48, 234, 107)
        --wcm-color-av-4: rgb(13, 177, 71)
        --wcm-color-av-5: rgb(46, 116, 25)
        ");
    }

    #[test]
    fn test_avatar_colors_short_address() {
        let colors = generate_avatar_colors("0xabc");
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].rgb, "rgb(26, 109, 220)");
        assert!(generate_avatar_colors("").is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_preload_image_loaded() {
        let harness = TestHarness::desktop();
        let outcome = preload_image(&harness.ctx, "https://img/a.png").await.unwrap();
        assert_eq!(outcome, PreloadOutcome::Loaded);
        assert_eq!(harness.images.loads(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preload_image_abandoned_after_timeout() {
        let client = Arc::new(crate::client::LocalClient::new(Vec::new()));
        let ctx = ModalContext::builder(ModalConfig::default(), client)
            .image_loader(Arc::new(ScriptedImageLoader::new(Duration::from_secs(10), false)))
            .storage(Arc::new(MemoryStorage::new()))
            .build();

        let outcome = preload_image(&ctx, "https://img/slow.png").await.unwrap();
        assert_eq!(outcome, PreloadOutcome::Abandoned);
    }

    #[tokio::test(start_paused = true)]
    async fn test_preload_image_failure_propagates() {
        let client = Arc::new(crate::client::LocalClient::new(Vec::new()));
        let ctx = ModalContext::builder(ModalConfig::default(), client)
            .image_loader(Arc::new(ScriptedImageLoader::new(Duration::from_millis(10), true)))
            .build();

        assert!(preload_image(&ctx, "https://img/broken.png").await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_runs_only_last_call() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let debouncer = Debouncer::new().unwrap();

        for i in 1..=3 {
            let calls = Arc::clone(&calls);
            debouncer.call(move || calls.lock().push(i));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(calls.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(*calls.lock(), vec![3]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_cancel() {
        let calls = Arc::new(Mutex::new(0));
        let debouncer = Debouncer::with_delay(Duration::from_millis(50)).unwrap();
        {
            let calls = Arc::clone(&calls);
            debouncer.call(move || *calls.lock() += 1);
        }
        debouncer.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(*calls.lock(), 0);
    }

    #[test]
    fn test_debouncer_requires_runtime() {
        assert!(matches!(Debouncer::new(), Err(ModalError::Runtime(_))));
    }

    #[test]
    fn test_reject_standalone_button_component() {
        let harness = TestHarness::desktop();
        assert!(reject_standalone_button_component(&harness.ctx).is_ok());

        harness.ctx.options.set_is_standalone(true);
        let err = reject_standalone_button_component(&harness.ctx).unwrap_err();
        assert!(matches!(err, ModalError::StandaloneMode));
    }

    #[test]
    fn test_recent_wallet_round_trip() {
        let storage = MemoryStorage::new();
        assert!(get_recent_wallet(&storage).unwrap().is_none());

        let wallet = WalletMother::everywhere();
        set_recent_wallet(&storage, &wallet).unwrap();

        assert_eq!(get_recent_wallet(&storage).unwrap(), Some(wallet));
    }

    #[test]
    fn test_recent_wallet_malformed_json_propagates() {
        let storage = MemoryStorage::new();
        storage.set_item(RECENT_WALLET_KEY, "{not json").unwrap();

        let err = get_recent_wallet(&storage).unwrap_err();
        assert!(matches!(err, ModalError::Serialization(_)));
    }
}
