//! Port definition for resolution memoization.

use std::collections::HashMap;

use crate::domain::entities::{CacheEntry, ResolutionKey, ResolvedThumbnail};

/// Memoizes probe outcomes per subject and media source.
///
/// Reads never block on a probe. Entries are never evicted.
pub trait ResolutionCachePort: Send + Sync {
    /// Returns the current entry for `key`.
    fn get(&self, key: &ResolutionKey) -> Option<CacheEntry>;

    /// Marks `key` as pending if it has no entry yet.
    ///
    /// Returns true only for the call that created the entry; that caller owns
    /// the probe.
    fn begin_resolution(&self, key: &ResolutionKey) -> bool;

    /// Stores the terminal outcome for `key`. Last write wins.
    fn complete(&self, key: &ResolutionKey, outcome: Option<ResolvedThumbnail>);

    /// Copies every entry for synchronous consumers.
    fn snapshot(&self) -> HashMap<ResolutionKey, CacheEntry>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns true if nothing has been memoized.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
