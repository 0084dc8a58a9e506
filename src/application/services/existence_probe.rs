//! Sequential existence probing over a candidate list.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::ports::ImageProbePort;

use super::fallback_chain::FallbackChain;

/// Walks candidates in order and stops at the first one that loads.
///
/// Candidates are never tried concurrently: candidate `i + 1` is only
/// requested after candidate `i` has failed.
#[derive(Clone)]
pub struct ExistenceProbe {
    port: Arc<dyn ImageProbePort>,
}

impl std::fmt::Debug for ExistenceProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExistenceProbe").finish_non_exhaustive()
    }
}

impl ExistenceProbe {
    /// Creates a probe backed by the host image-load primitive.
    #[must_use]
    pub fn new(port: Arc<dyn ImageProbePort>) -> Self {
        Self { port }
    }

    /// Returns the first candidate that loads, or `None` if all fail.
    pub async fn probe(&self, candidates: &[String]) -> Option<String> {
        self.probe_chain(FallbackChain::new(candidates.to_vec())).await
    }

    /// Walks a fallback chain until a candidate loads or the chain runs out.
    pub async fn probe_chain(&self, mut chain: FallbackChain) -> Option<String> {
        let mut current = chain.current().map(str::to_owned);

        while let Some(url) = current {
            match self.port.load(&url).await {
                Ok(()) => {
                    debug!(url = %url, attempts = chain.attempted().len() + 1, "Candidate loaded");
                    return Some(url);
                }
                Err(e) => {
                    trace!(url = %url, error = %e, "Candidate failed");
                }
            }
            current = chain.advance().map(str::to_owned);
        }

        debug!(candidates = chain.candidates().len(), "No candidate loaded");
        None
    }
}
