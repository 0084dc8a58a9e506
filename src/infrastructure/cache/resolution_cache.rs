//! In-memory resolution cache.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::domain::entities::{CacheEntry, ResolutionKey, ResolvedThumbnail};
use crate::domain::ports::ResolutionCachePort;

/// Process-wide memo of probe outcomes.
///
/// `begin_resolution` is a check-then-act sequence, so every access goes through
/// one mutex. The lock is never held across an await point.
#[derive(Default)]
pub struct MemoryResolutionCache {
    entries: Mutex<HashMap<ResolutionKey, CacheEntry>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryResolutionCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        };
        for entry in entries.values() {
            match entry {
                CacheEntry::Pending => stats.pending += 1,
                CacheEntry::Resolved(_) => stats.resolved += 1,
                CacheEntry::AttemptedEmpty => stats.empty += 1,
            }
        }
        stats
    }
}

impl std::fmt::Debug for MemoryResolutionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryResolutionCache")
            .field("stats", &self.stats())
            .finish()
    }
}

/// Statistics about cache contents and lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an entry.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries with a probe in flight.
    pub pending: usize,
    /// Entries resolved to an image.
    pub resolved: usize,
    /// Entries where every candidate failed.
    pub empty: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} resolved, {} empty, {} pending ({} hits, {} misses)",
            self.resolved, self.empty, self.pending, self.hits, self.misses
        )
    }
}

impl ResolutionCachePort for MemoryResolutionCache {
    fn get(&self, key: &ResolutionKey) -> Option<CacheEntry> {
        let entry = self.entries.lock().get(key).cloned();
        if entry.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Resolution cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = %key, "Resolution cache miss");
        }
        entry
    }

    fn begin_resolution(&self, key: &ResolutionKey) -> bool {
        match self.entries.lock().entry(key.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(CacheEntry::Pending);
                debug!(key = %key, "Resolution started");
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    fn complete(&self, key: &ResolutionKey, outcome: Option<ResolvedThumbnail>) {
        let entry = CacheEntry::from_outcome(outcome);
        let previous = self.entries.lock().insert(key.clone(), entry.clone());
        match previous {
            Some(CacheEntry::Pending) => {}
            None => warn!(key = %key, "Completed a resolution that was never started"),
            Some(old) if old != entry => {
                warn!(key = %key, ?old, new = ?entry, "Resolution completed twice, keeping latest");
            }
            Some(_) => {}
        }
        debug!(key = %key, resolved = entry.thumbnail().is_some(), "Resolution completed");
    }

    fn snapshot(&self) -> HashMap<ResolutionKey, CacheEntry> {
        self.entries.lock().clone()
    }

    fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
