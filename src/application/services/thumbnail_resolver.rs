//! Synchronous thumbnail selection.
//!
//! Precedence, first match wins:
//! 1. empty media list: placeholder
//! 2. any `thumbnail` item (first in list order)
//! 3. first item is an `image`
//! 4. first item is a `gallery`: its first image, else probe its folder
//! 5. first item is a YouTube `video`: the derived `maxresdefault` thumbnail
//! 6. anything else: placeholder

use tracing::trace;

use crate::domain::entities::{
    Gallery, MediaItem, ProbeRequest, Resolution, ResolvedThumbnail, Subject,
};

use super::gallery_candidates::gallery_candidates;
use super::youtube;

/// Picks a representative thumbnail without performing I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThumbnailResolver;

impl ThumbnailResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Resolves the thumbnail of a subject.
    #[must_use]
    pub fn resolve(&self, subject: &dyn Subject) -> Resolution {
        let resolution = self.resolve_media(subject.media());
        trace!(id = %subject.id(), label = subject.label(), ?resolution, "Resolved thumbnail");
        resolution
    }

    /// Resolves the thumbnail of a bare media list.
    #[must_use]
    pub fn resolve_media(&self, media: &[MediaItem]) -> Resolution {
        let Some(first) = media.first() else {
            return Resolution::Placeholder;
        };

        if let Some(link) = media.iter().find_map(|item| match item {
            MediaItem::Thumbnail(link) => Some(link),
            _ => None,
        }) {
            return Resolution::Ready(ResolvedThumbnail::new(&link.src, &link.alt));
        }

        match first {
            MediaItem::Image(link) => Resolution::Ready(ResolvedThumbnail::new(&link.src, &link.alt)),
            MediaItem::Gallery(gallery) => Self::resolve_gallery(gallery),
            MediaItem::Video(link) => youtube::thumbnail_for_video(&link.src).map_or(
                Resolution::Placeholder,
                |url| Resolution::Ready(ResolvedThumbnail::new(url, &link.alt)),
            ),
            MediaItem::Thumbnail(_)
            | MediaItem::Iframe(_)
            | MediaItem::Blog(_)
            | MediaItem::Pdf(_)
            | MediaItem::Unknown => Resolution::Placeholder,
        }
    }

    fn resolve_gallery(gallery: &Gallery) -> Resolution {
        if let Some(first) = gallery.first_image() {
            return Resolution::Ready(ResolvedThumbnail::new(first, &gallery.alt));
        }

        match gallery.base_src.as_deref().map(str::trim) {
            Some(folder) if !folder.is_empty() => Resolution::NeedsProbe(ProbeRequest {
                source: folder.to_string(),
                alt: gallery.alt.clone(),
                candidates: gallery_candidates(folder),
            }),
            _ => Resolution::Placeholder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MediaLink, Project};
    use test_case::test_case;

    fn image(src: &str) -> MediaItem {
        MediaItem::Image(MediaLink::new(src, format!("{src} alt")))
    }

    fn thumbnail(src: &str) -> MediaItem {
        MediaItem::Thumbnail(MediaLink::new(src, format!("{src} alt")))
    }

    fn video(src: &str) -> MediaItem {
        MediaItem::Video(MediaLink::new(src, "video"))
    }

    fn ready(url: &str, alt: &str) -> Resolution {
        Resolution::Ready(ResolvedThumbnail::new(url, alt))
    }

    #[test]
    fn test_empty_media_is_placeholder() {
        assert_eq!(ThumbnailResolver::new().resolve_media(&[]), Resolution::Placeholder);
    }

    #[test_case(vec![thumbnail("/t.png"), image("/a.png")] ; "thumbnail_first")]
    #[test_case(vec![image("/a.png"), thumbnail("/t.png")] ; "thumbnail_after_image")]
    #[test_case(vec![video("https://youtu.be/dQw4w9WgXcQ"), thumbnail("/t.png")] ; "thumbnail_after_video")]
    #[test_case(vec![MediaItem::Gallery(Gallery::unresolved("media/x", "g")), thumbnail("/t.png"), thumbnail("/u.png")] ; "first_of_many_thumbnails")]
    fn test_thumbnail_always_wins(media: Vec<MediaItem>) {
        assert_eq!(
            ThumbnailResolver::new().resolve_media(&media),
            ready("/t.png", "/t.png alt")
        );
    }

    #[test]
    fn test_first_image() {
        let media = vec![image("/a.png"), image("/b.png")];

        assert_eq!(
            ThumbnailResolver::new().resolve_media(&media),
            ready("/a.png", "/a.png alt")
        );
    }

    #[test]
    fn test_image_not_first_is_ignored() {
        let media = vec![MediaItem::Pdf(MediaLink::new("/cv.pdf", "CV")), image("/a.png")];

        assert_eq!(ThumbnailResolver::new().resolve_media(&media), Resolution::Placeholder);
    }

    #[test]
    fn test_gallery_with_images() {
        let gallery = Gallery::with_images(
            vec!["media/x/2.png".to_string(), "media/x/1.png".to_string()],
            "Shots",
        );

        let resolution = ThumbnailResolver::new().resolve_media(&[MediaItem::Gallery(gallery)]);

        assert_eq!(resolution, ready("media/x/2.png", "Shots"));
        assert!(!resolution.needs_probe());
    }

    #[test]
    fn test_gallery_without_images_needs_probe() {
        let gallery = Gallery::unresolved("Media/Proj X", "Shots");

        let resolution = ThumbnailResolver::new().resolve_media(&[MediaItem::Gallery(gallery)]);

        let Resolution::NeedsProbe(request) = resolution else {
            panic!("expected probe request, got {resolution:?}");
        };
        assert_eq!(request.source, "Media/Proj X");
        assert_eq!(request.alt, "Shots");
        assert_eq!(request.candidates, gallery_candidates("Media/Proj X"));
    }

    #[test]
    fn test_malformed_gallery_is_placeholder() {
        let gallery = Gallery {
            alt: "Broken".to_string(),
            title: None,
            base_src: None,
            images: Vec::new(),
        };

        assert_eq!(
            ThumbnailResolver::new().resolve_media(&[MediaItem::Gallery(gallery)]),
            Resolution::Placeholder
        );
    }

    #[test]
    fn test_youtube_video() {
        let media = vec![video("https://www.youtube.com/watch?v=dQw4w9WgXcQ")];

        assert_eq!(
            ThumbnailResolver::new().resolve_media(&media),
            ready(
                "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
                "video"
            )
        );
    }

    #[test_case(video("/media/demo.mp4") ; "local_video")]
    #[test_case(video("https://youtube.com/watch?v=bad") ; "malformed_youtube")]
    #[test_case(MediaItem::Iframe(MediaLink::new("https://example.com", "e")) ; "iframe")]
    #[test_case(MediaItem::Blog(MediaLink::new("https://blog.example.com", "b")) ; "blog")]
    #[test_case(MediaItem::Pdf(MediaLink::new("/paper.pdf", "p")) ; "pdf")]
    #[test_case(MediaItem::Unknown ; "unknown")]
    fn test_no_derivable_thumbnail(item: MediaItem) {
        assert_eq!(
            ThumbnailResolver::new().resolve_media(&[item]),
            Resolution::Placeholder
        );
    }

    #[test]
    fn test_resolve_subject() {
        let project: Project = serde_json::from_str(
            r#"{"id": 4, "title": "P", "media": [{"type": "image", "src": "/p.png", "alt": "P"}]}"#,
        )
        .unwrap();

        assert_eq!(ThumbnailResolver::new().resolve(&project), ready("/p.png", "P"));
    }
}
