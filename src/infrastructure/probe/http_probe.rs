//! HTTP image probe.

use std::time::Duration;

use async_trait::async_trait;
use tracing::trace;

use crate::domain::ports::{ImageProbePort, ProbeError, ProbeResult};

use super::{ensure_decodable, is_remote_url};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Probes images by downloading and decoding them.
///
/// Relative URLs are resolved against `site_url` when one is configured.
#[derive(Debug, Clone)]
pub struct HttpImageProbe {
    client: reqwest::Client,
    site_url: Option<String>,
}

impl HttpImageProbe {
    /// Creates a probe with the given timeout.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(timeout: Duration, site_url: Option<String>) -> ProbeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProbeError::NetworkError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            site_url: site_url.map(|url| url.trim_end_matches('/').to_string()),
        })
    }

    /// Returns the absolute URL fetched for `url`.
    ///
    /// # Errors
    /// Returns `Unsupported` for relative URLs when no site URL is configured.
    pub fn absolute_url(&self, url: &str) -> ProbeResult<String> {
        if is_remote_url(url) {
            return Ok(url.to_string());
        }
        self.site_url
            .as_ref()
            .map(|site| format!("{site}/{}", url.trim_start_matches('/')))
            .ok_or_else(|| ProbeError::Unsupported(url.to_string()))
    }
}

#[async_trait]
impl ImageProbePort for HttpImageProbe {
    async fn load(&self, url: &str) -> ProbeResult<()> {
        let absolute = self.absolute_url(url)?;
        trace!(url = %absolute, "Probing remote image");

        let response = self
            .client
            .get(&absolute)
            .send()
            .await
            .map_err(|e| ProbeError::NetworkError(format!("Request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ProbeError::NotFound(absolute));
        }
        if !status.is_success() {
            return Err(ProbeError::NetworkError(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProbeError::NetworkError(format!("Failed to read body: {e}")))?;

        ensure_decodable(&absolute, bytes).await
    }
}
