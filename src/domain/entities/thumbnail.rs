//! Thumbnail resolution outcomes and memoization entries.

use serde::Serialize;

use super::subject::{SubjectId, SubjectKind};

/// The image chosen to represent a subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedThumbnail {
    /// Image URL.
    pub url: String,
    /// Alternative text.
    pub alt: String,
}

impl ResolvedThumbnail {
    /// Creates a resolved thumbnail.
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: alt.into(),
        }
    }
}

/// Work order for the existence probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Media source the candidates were derived from.
    pub source: String,
    /// Alternative text for whichever candidate wins.
    pub alt: String,
    /// Candidate URLs, most preferred first.
    pub candidates: Vec<String>,
}

/// Synchronous outcome of thumbnail selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing to show; render a placeholder.
    Placeholder,
    /// Thumbnail known without any I/O.
    Ready(ResolvedThumbnail),
    /// Candidates must be probed before a thumbnail is known.
    NeedsProbe(ProbeRequest),
}

impl Resolution {
    /// Returns true if the caller has to probe.
    #[must_use]
    pub const fn needs_probe(&self) -> bool {
        matches!(self, Self::NeedsProbe(_))
    }
}

/// Memoization key: one entry per subject and media source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResolutionKey {
    /// Owning collection.
    pub kind: SubjectKind,
    /// Subject identifier within the collection.
    pub subject_id: SubjectId,
    /// Media source the probe runs against.
    pub source: String,
}

impl ResolutionKey {
    /// Creates a key.
    #[must_use]
    pub fn new(kind: SubjectKind, subject_id: SubjectId, source: impl Into<String>) -> Self {
        Self {
            kind,
            subject_id,
            source: source.into(),
        }
    }
}

impl std::fmt::Display for ResolutionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}:{}", self.kind, self.subject_id, self.source)
    }
}

/// State of a memoized resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// A probe is in flight.
    Pending,
    /// Probe finished with a winner.
    Resolved(ResolvedThumbnail),
    /// Probe finished and every candidate failed.
    AttemptedEmpty,
}

impl CacheEntry {
    /// Builds the terminal entry for a probe outcome.
    #[must_use]
    pub fn from_outcome(outcome: Option<ResolvedThumbnail>) -> Self {
        outcome.map_or(Self::AttemptedEmpty, Self::Resolved)
    }

    /// Returns true once the probe has finished.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns the resolved thumbnail, if any.
    #[must_use]
    pub const fn thumbnail(&self) -> Option<&ResolvedThumbnail> {
        match self {
            Self::Resolved(thumbnail) => Some(thumbnail),
            Self::Pending | Self::AttemptedEmpty => None,
        }
    }
}
