//! Port definition for image existence probing.

use async_trait::async_trait;

/// Result type for probe operations.
pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Reasons a candidate URL failed to load.
///
/// These are routine outcomes while walking a fallback list, not faults.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    /// Nothing exists at the URL.
    #[error("not found: {0}")]
    NotFound(String),
    /// The resource exists but is not a decodable image.
    #[error("decode error: {0}")]
    DecodeError(String),
    /// I/O error while reading a local file.
    #[error("IO error: {0}")]
    IoError(String),
    /// Network error while fetching a remote resource.
    #[error("network error: {0}")]
    NetworkError(String),
    /// No adapter can handle this URL.
    #[error("unsupported URL: {0}")]
    Unsupported(String),
}

/// Host image-load primitive.
///
/// Implementations must be thread-safe and must not carry state from one call
/// into the next.
#[async_trait]
pub trait ImageProbePort: Send + Sync {
    /// Resolves `Ok(())` if `url` points to a decodable image.
    async fn load(&self, url: &str) -> ProbeResult<()>;
}
