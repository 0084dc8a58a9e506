//! Local filesystem image probe.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::trace;

use crate::domain::ports::{ImageProbePort, ProbeError, ProbeResult};

use super::{ensure_decodable, is_remote_url};

/// Probes site-relative URLs against a local public directory.
#[derive(Debug, Clone)]
pub struct FsImageProbe {
    public_dir: PathBuf,
}

impl FsImageProbe {
    /// Creates a probe rooted at `public_dir`.
    #[must_use]
    pub const fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }

    /// Maps a percent-encoded, site-relative URL onto a file path.
    ///
    /// # Errors
    /// Returns `Unsupported` for remote URLs, malformed escapes and `..` segments.
    pub fn local_path(&self, url: &str) -> ProbeResult<PathBuf> {
        if is_remote_url(url) {
            return Err(ProbeError::Unsupported(url.to_string()));
        }

        let path = url.split(['?', '#']).next().unwrap_or_default();
        let mut resolved = self.public_dir.clone();
        for segment in path.split('/').filter(|s| !s.is_empty() && *s != ".") {
            let decoded = urlencoding::decode(segment)
                .map_err(|e| ProbeError::Unsupported(format!("{url}: {e}")))?;
            if decoded == ".." || decoded.contains(['/', '\\']) {
                return Err(ProbeError::Unsupported(url.to_string()));
            }
            resolved.push(&*decoded);
        }
        Ok(resolved)
    }
}

#[async_trait]
impl ImageProbePort for FsImageProbe {
    async fn load(&self, url: &str) -> ProbeResult<()> {
        let path = self.local_path(url)?;
        trace!(url = %url, path = %path.display(), "Probing local image");

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ProbeError::NotFound(path.display().to_string())
            } else {
                ProbeError::IoError(format!("{}: {e}", path.display()))
            }
        })?;

        ensure_decodable(url, Bytes::from(bytes)).await
    }
}
