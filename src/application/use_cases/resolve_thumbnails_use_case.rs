//! Thumbnail resolution use case.
//!
//! Drives the resolver, the existence probe and the resolution cache the way a
//! rendering layer does: a synchronous read on every render, and at most one
//! probe per subject and media source.

use std::sync::Arc;

use futures_util::StreamExt;
use futures_util::stream;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::application::dto::{ThumbnailOrigin, ThumbnailReport};
use crate::application::services::{ExistenceProbe, FallbackChain, ThumbnailResolver, youtube};
use crate::domain::entities::{
    CacheEntry, PortfolioCatalog, Resolution, ResolutionKey, ResolvedThumbnail, Subject,
    SubjectKind,
};
use crate::domain::ports::ResolutionCachePort;

/// Default number of subjects probed at the same time.
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 4;

/// Tuning for thumbnail resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Subjects probed at the same time. Each subject's own candidates are
    /// always tried one after another.
    pub max_concurrent_probes: usize,
    /// Probe YouTube thumbnails through their rendition chain instead of
    /// trusting `maxresdefault`.
    pub verify_video_thumbnails: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            max_concurrent_probes: DEFAULT_MAX_CONCURRENT_PROBES,
            verify_video_thumbnails: false,
        }
    }
}

enum Plan {
    Done(Option<ResolvedThumbnail>),
    Probe {
        key: ResolutionKey,
        alt: String,
        chain: FallbackChain,
    },
}

/// Resolves and memoizes subject thumbnails.
#[derive(Clone)]
pub struct ResolveThumbnailsUseCase {
    resolver: ThumbnailResolver,
    probe: ExistenceProbe,
    cache: Arc<dyn ResolutionCachePort>,
    options: ResolveOptions,
}

impl std::fmt::Debug for ResolveThumbnailsUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveThumbnailsUseCase")
            .field("options", &self.options)
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl ResolveThumbnailsUseCase {
    /// Creates new resolve use case.
    #[must_use]
    pub fn new(
        probe: ExistenceProbe,
        cache: Arc<dyn ResolutionCachePort>,
        options: ResolveOptions,
    ) -> Self {
        Self {
            resolver: ThumbnailResolver::new(),
            probe,
            cache,
            options,
        }
    }

    fn plan(&self, kind: SubjectKind, subject: &dyn Subject) -> Plan {
        match self.resolver.resolve(subject) {
            Resolution::Placeholder => Plan::Done(None),
            Resolution::NeedsProbe(request) => Plan::Probe {
                key: ResolutionKey::new(kind, subject.id(), request.source),
                alt: request.alt,
                chain: FallbackChain::new(request.candidates),
            },
            Resolution::Ready(thumbnail) => {
                if self.options.verify_video_thumbnails
                    && let Some(chain) = youtube::fallback_chain_for(&thumbnail.url)
                {
                    Plan::Probe {
                        key: ResolutionKey::new(kind, subject.id(), thumbnail.url),
                        alt: thumbnail.alt,
                        chain,
                    }
                } else {
                    Plan::Done(Some(thumbnail))
                }
            }
        }
    }

    /// Returns the thumbnail to render right now.
    ///
    /// Never waits for a probe: while one is pending, or if none was started,
    /// this returns `None` and the caller renders a placeholder.
    #[must_use]
    pub fn current(&self, kind: SubjectKind, subject: &dyn Subject) -> Option<ResolvedThumbnail> {
        match self.plan(kind, subject) {
            Plan::Done(thumbnail) => thumbnail,
            Plan::Probe { key, .. } => self
                .cache
                .get(&key)
                .and_then(|entry| entry.thumbnail().cloned()),
        }
    }

    /// Resolves a subject, probing if this is the first request for it.
    ///
    /// If another caller already owns the probe, returns whatever the cache
    /// holds without probing again.
    pub async fn ensure_resolved(
        &self,
        kind: SubjectKind,
        subject: &dyn Subject,
    ) -> Option<ResolvedThumbnail> {
        self.ensure_resolved_with_origin(kind, subject).await.1
    }

    async fn ensure_resolved_with_origin(
        &self,
        kind: SubjectKind,
        subject: &dyn Subject,
    ) -> (ThumbnailOrigin, Option<ResolvedThumbnail>) {
        match self.plan(kind, subject) {
            Plan::Done(Some(thumbnail)) => (ThumbnailOrigin::Direct, Some(thumbnail)),
            Plan::Done(None) => (ThumbnailOrigin::Placeholder, None),
            Plan::Probe { key, alt, chain } => {
                if self.cache.begin_resolution(&key) {
                    let outcome = self.spawn_probe(key, alt, chain).await;
                    (origin_of(&CacheEntry::from_outcome(outcome.clone())), outcome)
                } else {
                    debug!(key = %key, "Resolution already claimed");
                    let entry = self.cache.get(&key).unwrap_or(CacheEntry::Pending);
                    (origin_of(&entry), entry.thumbnail().cloned())
                }
            }
        }
    }

    /// Starts probing a subject in the background.
    ///
    /// Returns `None` when nothing needs probing or a probe was already
    /// started. Dropping the handle does not cancel the probe; its outcome
    /// still lands in the cache.
    pub fn prefetch(
        &self,
        kind: SubjectKind,
        subject: &dyn Subject,
    ) -> Option<JoinHandle<Option<ResolvedThumbnail>>> {
        let Plan::Probe { key, alt, chain } = self.plan(kind, subject) else {
            return None;
        };
        if !self.cache.begin_resolution(&key) {
            return None;
        }
        Some(tokio::spawn(probe_and_complete(
            self.probe.clone(),
            self.cache.clone(),
            key,
            alt,
            chain,
        )))
    }

    /// Runs a claimed probe on its own task and waits for it.
    ///
    /// The probe outlives the caller: dropping this future still lets the
    /// task complete the cache entry.
    async fn spawn_probe(
        &self,
        key: ResolutionKey,
        alt: String,
        chain: FallbackChain,
    ) -> Option<ResolvedThumbnail> {
        let task = tokio::spawn(probe_and_complete(
            self.probe.clone(),
            self.cache.clone(),
            key.clone(),
            alt,
            chain,
        ));

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(key = %key, error = %e, "Probe task failed");
                self.cache.complete(&key, None);
                None
            }
        }
    }

    /// Resolves every subject of a catalog.
    ///
    /// Distinct subjects are probed concurrently up to
    /// `max_concurrent_probes`; reports come back in catalog order.
    pub async fn resolve_catalog(&self, catalog: &PortfolioCatalog) -> Vec<ThumbnailReport> {
        let reports: Vec<ThumbnailReport> = stream::iter(catalog.subjects())
            .map(|subject_ref| async move {
                let (origin, thumbnail) = self
                    .ensure_resolved_with_origin(subject_ref.kind, subject_ref.subject)
                    .await;
                ThumbnailReport {
                    kind: subject_ref.kind,
                    id: subject_ref.subject.id(),
                    label: subject_ref.subject.label().to_string(),
                    origin,
                    thumbnail,
                }
            })
            .buffered(self.options.max_concurrent_probes.max(1))
            .collect()
            .await;

        let with_thumbnail = reports.iter().filter(|r| r.has_thumbnail()).count();
        info!(
            subjects = reports.len(),
            with_thumbnail,
            placeholders = reports.len() - with_thumbnail,
            "Resolved catalog thumbnails"
        );
        reports
    }
}

fn origin_of(entry: &CacheEntry) -> ThumbnailOrigin {
    match entry {
        CacheEntry::Pending => ThumbnailOrigin::Pending,
        CacheEntry::Resolved(_) => ThumbnailOrigin::Probed,
        CacheEntry::AttemptedEmpty => ThumbnailOrigin::ProbeExhausted,
    }
}

async fn probe_and_complete(
    probe: ExistenceProbe,
    cache: Arc<dyn ResolutionCachePort>,
    key: ResolutionKey,
    alt: String,
    chain: FallbackChain,
) -> Option<ResolvedThumbnail> {
    debug!(key = %key, candidates = chain.candidates().len(), "Probing thumbnail candidates");
    let outcome = probe
        .probe_chain(chain)
        .await
        .map(|url| ResolvedThumbnail::new(url, alt));
    cache.complete(&key, outcome.clone());
    outcome
}
