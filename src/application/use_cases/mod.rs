//! Use case implementations.

mod generate_manifest_use_case;
mod resolve_thumbnails_use_case;

pub use generate_manifest_use_case::{
    DEFAULT_DATA_FILES, FileManifest, GenerateManifestUseCase, ManifestRequest,
};
pub use resolve_thumbnails_use_case::{
    DEFAULT_MAX_CONCURRENT_PROBES, ResolveOptions, ResolveThumbnailsUseCase,
};
