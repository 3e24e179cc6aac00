//! Shared test utilities and Mother pattern factories.
//!
//! Reusable fixtures for wallets, chains and a fully wired [`TestHarness`]
//! with recording fakes for every platform service.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

use crate::client::{ImageLoader, LocalClient};
use crate::context::ModalContext;
use crate::domain::{Chain, ModalError, Result, WalletData, WalletLinks};
use crate::state::ModalConfig;
use crate::state::platform::clipboard::{Clipboard, ClipboardError, ClipboardResult};
use crate::state::platform::{Device, HrefTarget, MemoryStorage, Navigator};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ChainMother;

impl ChainMother {
    #[must_use]
    pub fn ethereum() -> Chain {
        Chain::new(1, "Ethereum")
    }

    #[must_use]
    pub fn polygon() -> Chain {
        Chain::new(137, "Polygon")
    }

    #[must_use]
    pub fn optimism() -> Chain {
        Chain::new(10, "Optimism")
    }

    /// A chain no default configuration supports.
    #[must_use]
    pub fn unsupported() -> Chain {
        Chain::new(56, "BNB Smart Chain")
    }

    #[must_use]
    pub fn defaults() -> Vec<Chain> {
        vec![Self::ethereum(), Self::polygon(), Self::optimism()]
    }
}

pub struct WalletMother;

impl WalletMother {
    /// Wallet with native and universal links on both platforms.
    #[must_use]
    pub fn everywhere() -> WalletData {
        WalletData::new("rainbow", "Rainbow Wallet")
            .with_image_id("rainbow-img")
            .with_mobile(WalletLinks::native("rainbow://").with_universal("https://rnbwapp.com"))
            .with_desktop(WalletLinks::native("rainbow-desktop://").with_universal("https://rainbow.me"))
    }

    #[must_use]
    pub fn mobile_native_only() -> WalletData {
        WalletData::new("trust", "Trust Wallet").with_mobile(WalletLinks::native("trust://"))
    }

    #[must_use]
    pub fn mobile_universal_only() -> WalletData {
        WalletData::new("zerion", "Zerion").with_mobile(WalletLinks::universal("https://wallet.zerion.io"))
    }

    #[must_use]
    pub fn desktop_native_only() -> WalletData {
        WalletData::new("ledger", "Ledger Live").with_desktop(WalletLinks::native("ledgerlive://"))
    }

    #[must_use]
    pub fn web_only() -> WalletData {
        WalletData::new("coinbase", "Coinbase Wallet")
            .with_desktop(WalletLinks::universal("https://go.cb-w.com"))
    }

    /// Wallet without any deep link.
    #[must_use]
    pub fn bare() -> WalletData {
        WalletData::new("plain", "Plain Wallet")
    }
}

// ============================================================================
// Recording Fakes
// ============================================================================

/// Navigator recording every opened link.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<(String, HrefTarget)>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn opened(&self) -> Vec<(String, HrefTarget)> {
        self.opened.lock().clone()
    }

    #[must_use]
    pub fn last_href(&self) -> Option<String> {
        self.opened.lock().last().map(|(href, _)| href.clone())
    }
}

impl Navigator for RecordingNavigator {
    fn open_href(&self, href: &str, target: HrefTarget) -> Result<()> {
        self.opened.lock().push((href.to_string(), target));
        Ok(())
    }
}

/// Clipboard keeping copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> ClipboardResult<()> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that is never available.
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> ClipboardResult<()> {
        Err(ClipboardError::NotAvailable)
    }
}

/// Image loader with a scripted delay and outcome.
#[derive(Debug, Default)]
pub struct ScriptedImageLoader {
    delay: Duration,
    fail: bool,
    loads: AtomicUsize,
}

impl ScriptedImageLoader {
    #[must_use]
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self {
            delay,
            fail,
            loads: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageLoader for ScriptedImageLoader {
    async fn load(&self, src: &str) -> Result<()> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        if self.fail {
            Err(ModalError::client(format!("failed to load {src}")))
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A [`ModalContext`] wired to in-memory fakes, with handles to each fake.
pub struct TestHarness {
    pub ctx: ModalContext,
    pub client: LocalClient,
    pub navigator: Arc<RecordingNavigator>,
    pub clipboard: Arc<MemoryClipboard>,
    pub storage: Arc<MemoryStorage>,
    pub images: Arc<ScriptedImageLoader>,
}

impl TestHarness {
    #[must_use]
    pub fn new(config: ModalConfig, device: Device) -> Self {
        let client = LocalClient::new(config.chains.clone());
        let navigator = Arc::new(RecordingNavigator::default());
        let clipboard = Arc::new(MemoryClipboard::default());
        let storage = Arc::new(MemoryStorage::new());
        let images = Arc::new(ScriptedImageLoader::default());

        let ctx = ModalContext::builder(config, Arc::new(client.clone()))
            .navigator(navigator.clone())
            .clipboard(clipboard.clone())
            .storage(storage.clone())
            .image_loader(images.clone())
            .device(device)
            .build();

        Self {
            ctx,
            client,
            navigator,
            clipboard,
            storage,
            images,
        }
    }

    #[must_use]
    pub fn desktop() -> Self {
        Self::new(ModalConfig::default(), Device::Desktop)
    }

    #[must_use]
    pub fn mobile() -> Self {
        Self::new(ModalConfig::default(), Device::Mobile)
    }

    #[must_use]
    pub fn android() -> Self {
        Self::new(ModalConfig::default(), Device::Android)
    }

    /// Harness whose context uses `clipboard` instead of the memory one.
    #[must_use]
    pub fn with_clipboard(clipboard: Arc<dyn Clipboard>) -> Self {
        let harness = Self::desktop();
        let ctx = ModalContext::builder(ModalConfig::default(), Arc::new(harness.client.clone()))
            .navigator(harness.navigator.clone())
            .clipboard(clipboard)
            .storage(harness.storage.clone())
            .image_loader(harness.images.clone())
            .build();
        Self { ctx, ..harness }
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

#[fixture]
pub fn harness() -> TestHarness {
    TestHarness::desktop()
}
