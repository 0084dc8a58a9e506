//! Image-load primitives backing the existence probe.
//!
//! This module provides:
//! - Remote probing over HTTP
//! - Local probing against the site's public directory
//! - Routing between the two by URL scheme

pub mod fs_probe;
pub mod http_probe;
pub mod routing_probe;

pub use fs_probe::FsImageProbe;
pub use http_probe::HttpImageProbe;
pub use routing_probe::RoutingImageProbe;

use bytes::Bytes;

use crate::domain::ports::{ProbeError, ProbeResult};

/// Returns true for absolute http(s) URLs.
#[must_use]
pub fn is_remote_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Checks that `bytes` decode as an image, off the async runtime.
async fn ensure_decodable(url: &str, bytes: Bytes) -> ProbeResult<()> {
    tokio::task::spawn_blocking(move || image::load_from_memory(&bytes).map(|_| ()))
        .await
        .map_err(|e| ProbeError::DecodeError(format!("Decode task panicked: {e}")))?
        .map_err(|e| ProbeError::DecodeError(format!("{url}: {e}")))
}
