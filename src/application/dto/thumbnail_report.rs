//! Thumbnail resolution report DTOs.

use serde::Serialize;

use crate::domain::entities::{ResolvedThumbnail, SubjectId, SubjectKind};

/// How a subject's thumbnail was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThumbnailOrigin {
    /// Known from the media list alone.
    Direct,
    /// Found by probing candidates.
    Probed,
    /// Probed, but no candidate loaded.
    ProbeExhausted,
    /// Probe in flight elsewhere; no value yet.
    Pending,
    /// No derivable thumbnail.
    Placeholder,
}

impl ThumbnailOrigin {
    /// Returns human-readable description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Probed => "probed",
            Self::ProbeExhausted => "probe exhausted",
            Self::Pending => "pending",
            Self::Placeholder => "placeholder",
        }
    }
}

impl std::fmt::Display for ThumbnailOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Outcome for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailReport {
    /// Owning collection.
    pub kind: SubjectKind,
    /// Subject identifier.
    pub id: SubjectId,
    /// Subject label.
    pub label: String,
    /// How the thumbnail was obtained.
    pub origin: ThumbnailOrigin,
    /// The thumbnail, or `None` for a placeholder.
    pub thumbnail: Option<ResolvedThumbnail>,
}

impl ThumbnailReport {
    /// Returns true if the subject renders an image.
    #[must_use]
    pub const fn has_thumbnail(&self) -> bool {
        self.thumbnail.is_some()
    }
}
