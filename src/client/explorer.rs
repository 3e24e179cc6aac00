//! Explorer service: wallet image URLs and image fetching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::Result;
use crate::state::ModalConfig;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for image requests in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Explorer Client
// ============================================================================

/// Resolves wallet metadata URLs against the explorer API.
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    api_url: String,
    project_id: String,
}

impl ExplorerClient {
    /// Creates a client for `api_url` and `project_id`.
    #[must_use]
    pub fn new(api_url: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim_end_matches('/').to_string(),
            project_id: project_id.into(),
        }
    }

    /// Creates a client from the modal configuration.
    #[must_use]
    pub fn from_config(config: &ModalConfig) -> Self {
        Self::new(&config.explorer_api_url, &config.project_id)
    }

    /// URL of the explorer image with `image_id`.
    #[must_use]
    pub fn wallet_image_url(&self, image_id: &str) -> String {
        format!(
            "{}/w3m/v1/getWalletImage/{}?projectId={}",
            self.api_url,
            urlencoding::encode(image_id),
            urlencoding::encode(&self.project_id)
        )
    }
}

// ============================================================================
// Image Loading
// ============================================================================

/// Fetches an image so later displays are served from cache.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    /// Loads the image at `src`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be fetched.
    async fn load(&self, src: &str) -> Result<()>;
}

/// [`ImageLoader`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    inner: Client,
    timeout: Duration,
}

impl Default for HttpImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpImageLoader {
    /// Creates a loader with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a loader with a custom request timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            inner: Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, src: &str) -> Result<()> {
        self.inner
            .get(src)
            .header("accept", "image/*")
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_image_url() {
        let explorer = ExplorerClient::new("https://explorer-api.example.com/", "proj-1");
        insta::assert_snapshot!(
            explorer.wallet_image_url("a1b2"),
            @"https://explorer-api.example.com/w3m/v1/getWalletImage/a1b2?projectId=proj-1"
        );
    }

    #[test]
    fn test_from_config_uses_configured_api() {
        let config = ModalConfig {
            explorer_api_url: "https://api.local".to_string(),
            project_id: "p".to_string(),
            ..ModalConfig::default()
        };
        let url = ExplorerClient::from_config(&config).wallet_image_url("img");
        assert!(url.starts_with("https://api.local/w3m/v1/getWalletImage/img"));
    }
}
