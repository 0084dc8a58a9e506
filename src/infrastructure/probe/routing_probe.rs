//! Scheme-based routing between probe adapters.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ImageProbePort, ProbeError, ProbeResult};

use super::is_remote_url;

/// Sends http(s) URLs to the remote adapter and everything else to the local one.
#[derive(Clone, Default)]
pub struct RoutingImageProbe {
    local: Option<Arc<dyn ImageProbePort>>,
    remote: Option<Arc<dyn ImageProbePort>>,
}

impl std::fmt::Debug for RoutingImageProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingImageProbe")
            .field("local", &self.local.is_some())
            .field("remote", &self.remote.is_some())
            .finish()
    }
}

impl RoutingImageProbe {
    /// Creates a router with no adapters; every URL fails.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the adapter for site-relative URLs.
    #[must_use]
    pub fn with_local(mut self, local: Arc<dyn ImageProbePort>) -> Self {
        self.local = Some(local);
        self
    }

    /// Sets the adapter for absolute http(s) URLs.
    #[must_use]
    pub fn with_remote(mut self, remote: Arc<dyn ImageProbePort>) -> Self {
        self.remote = Some(remote);
        self
    }
}

#[async_trait]
impl ImageProbePort for RoutingImageProbe {
    async fn load(&self, url: &str) -> ProbeResult<()> {
        let adapter = if is_remote_url(url) {
            self.remote.as_ref()
        } else {
            self.local.as_ref()
        };

        match adapter {
            Some(adapter) => adapter.load(url).await,
            None => Err(ProbeError::Unsupported(url.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::ScriptedProbe;

    #[tokio::test]
    async fn test_routes_by_scheme() {
        let local = Arc::new(ScriptedProbe::new(["media/1.png"]));
        let remote = Arc::new(ScriptedProbe::new(["https://example.com/a.png"]));
        let router = RoutingImageProbe::new()
            .with_local(local.clone())
            .with_remote(remote.clone());

        assert!(router.load("media/1.png").await.is_ok());
        assert!(router.load("https://example.com/a.png").await.is_ok());
        assert_eq!(local.attempts(), vec!["media/1.png".to_string()]);
        assert_eq!(remote.attempts(), vec!["https://example.com/a.png".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_adapter_is_unsupported() {
        let router = RoutingImageProbe::new().with_local(Arc::new(ScriptedProbe::failing()));

        assert!(matches!(
            router.load("https://example.com/a.png").await,
            Err(ProbeError::Unsupported(_))
        ));
    }
}
