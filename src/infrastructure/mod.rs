//! Infrastructure layer with adapters for the filesystem, HTTP and memory.

/// Resolution memoization.
pub mod cache;
/// Application configuration.
pub mod config;
/// Portfolio data documents and media folders.
pub mod data;
/// Image-load primitives.
pub mod probe;

pub use cache::{CacheStats, MemoryResolutionCache};
pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use data::{FsMediaDirectory, JsonDataStore};
pub use probe::{FsImageProbe, HttpImageProbe, RoutingImageProbe};
