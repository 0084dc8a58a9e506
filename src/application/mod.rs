//! Application layer with services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Thumbnail selection and probing services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ThumbnailOrigin, ThumbnailReport};
pub use services::{ExistenceProbe, ThumbnailResolver};
pub use use_cases::{
    GenerateManifestUseCase, ManifestRequest, ResolveOptions, ResolveThumbnailsUseCase,
};
