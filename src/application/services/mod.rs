//! Thumbnail selection and probing services.

pub mod existence_probe;
pub mod fallback_chain;
pub mod gallery_candidates;
pub mod path_prefix;
pub mod thumbnail_resolver;
pub mod youtube;

pub use existence_probe::ExistenceProbe;
pub use fallback_chain::FallbackChain;
pub use gallery_candidates::{encode_folder_path, gallery_candidates};
pub use path_prefix::prefix_path;
pub use thumbnail_resolver::ThumbnailResolver;
