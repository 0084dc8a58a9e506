//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{MediaItem, ResolvedThumbnail, Subject};
pub use errors::CatalogError;
pub use ports::{DocumentStorePort, ImageProbePort, MediaDirectoryPort, ResolutionCachePort};
