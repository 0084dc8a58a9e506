//! Domain entity definitions.

mod media;
mod subject;
mod thumbnail;

pub use media::{Gallery, MediaItem, MediaKind, MediaLink};
pub use subject::{
    Achievement, Contribution, ExperienceEntry, Leadership, Patent, PortfolioCatalog, Project,
    Publication, Subject, SubjectId, SubjectKind, SubjectRef, Volunteering,
};
pub use thumbnail::{CacheEntry, ProbeRequest, ResolutionKey, Resolution, ResolvedThumbnail};
