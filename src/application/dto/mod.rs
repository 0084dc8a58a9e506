//! Data transfer objects for application layer.

mod thumbnail_report;

pub use thumbnail_report::{ThumbnailOrigin, ThumbnailReport};
