//! Resolution memoization.

pub mod resolution_cache;

pub use resolution_cache::{CacheStats, MemoryResolutionCache};
