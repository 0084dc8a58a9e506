//! Media items attached to portfolio subjects.

use serde::{Deserialize, Serialize};

/// Discriminant of a [`MediaItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Direct image.
    Image,
    /// Author-designated thumbnail.
    Thumbnail,
    /// Playable video.
    Video,
    /// Ordered image gallery.
    Gallery,
    /// Embedded external page.
    Iframe,
    /// External article link.
    Blog,
    /// Downloadable document.
    Pdf,
    /// Unrecognised `type` value.
    Unknown,
}

impl MediaKind {
    /// Returns the wire name used in data documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Thumbnail => "thumbnail",
            Self::Video => "video",
            Self::Gallery => "gallery",
            Self::Iframe => "iframe",
            Self::Blog => "blog",
            Self::Pdf => "pdf",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single linked media resource (image, video, iframe, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLink {
    /// Resource URL or site-relative path.
    pub src: String,
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MediaLink {
    /// Creates a link without a title.
    #[must_use]
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            title: None,
        }
    }
}

/// An image gallery backed by a media folder.
///
/// `images` is filled in by manifest generation. Documents that have not been
/// through it carry the folder in `src` instead of `baseSrc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    /// Alternative text.
    #[serde(default)]
    pub alt: String,
    /// Optional caption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Folder holding the gallery images.
    #[serde(
        default,
        rename = "baseSrc",
        alias = "src",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_src: Option<String>,
    /// Resolved image paths, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Gallery {
    /// Creates a gallery that still needs its images discovered.
    #[must_use]
    pub fn unresolved(base_src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            title: None,
            base_src: Some(base_src.into()),
            images: Vec::new(),
        }
    }

    /// Creates a gallery with a pre-populated image list.
    #[must_use]
    pub fn with_images(images: Vec<String>, alt: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            title: None,
            base_src: None,
            images,
        }
    }

    /// Returns the canonical representative image, if known.
    #[must_use]
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// A media item as stored in the portfolio data documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    /// Direct image.
    Image(MediaLink),
    /// Explicit thumbnail; always preferred.
    Thumbnail(MediaLink),
    /// Video, possibly hosted on YouTube.
    Video(MediaLink),
    /// Image gallery.
    Gallery(Gallery),
    /// Embedded page.
    Iframe(MediaLink),
    /// Article link.
    Blog(MediaLink),
    /// PDF document.
    Pdf(MediaLink),
    /// Any other `type` value.
    #[serde(other)]
    Unknown,
}

impl MediaItem {
    /// Returns the item discriminant.
    #[must_use]
    pub const fn kind(&self) -> MediaKind {
        match self {
            Self::Image(_) => MediaKind::Image,
            Self::Thumbnail(_) => MediaKind::Thumbnail,
            Self::Video(_) => MediaKind::Video,
            Self::Gallery(_) => MediaKind::Gallery,
            Self::Iframe(_) => MediaKind::Iframe,
            Self::Blog(_) => MediaKind::Blog,
            Self::Pdf(_) => MediaKind::Pdf,
            Self::Unknown => MediaKind::Unknown,
        }
    }

    /// Returns the link payload for non-gallery items.
    #[must_use]
    pub const fn link(&self) -> Option<&MediaLink> {
        match self {
            Self::Image(link)
            | Self::Thumbnail(link)
            | Self::Video(link)
            | Self::Iframe(link)
            | Self::Blog(link)
            | Self::Pdf(link) => Some(link),
            Self::Gallery(_) | Self::Unknown => None,
        }
    }

    /// Returns the alternative text.
    #[must_use]
    pub fn alt(&self) -> &str {
        match self {
            Self::Gallery(gallery) => &gallery.alt,
            Self::Unknown => "",
            other => other.link().map_or("", |link| link.alt.as_str()),
        }
    }

    /// Returns the optional caption.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Gallery(gallery) => gallery.title.as_deref(),
            other => other.link().and_then(|link| link.title.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_tagged_items() {
        let json = r#"[
            {"type": "image", "src": "/a.png", "alt": "A"},
            {"type": "thumbnail", "src": "/t.png", "alt": "T", "title": "Cover"},
            {"type": "pdf", "src": "/paper.pdf", "alt": "Paper"}
        ]"#;

        let items: Vec<MediaItem> = serde_json::from_str(json).unwrap();

        assert_eq!(items[0], MediaItem::Image(MediaLink::new("/a.png", "A")));
        assert_eq!(items[1].kind(), MediaKind::Thumbnail);
        assert_eq!(items[1].title(), Some("Cover"));
        assert_eq!(items[2].kind(), MediaKind::Pdf);
    }

    #[test]
    fn test_gallery_accepts_src_alias() {
        let json = r#"{"type": "gallery", "src": "media/Proj X", "alt": "Shots"}"#;

        let item: MediaItem = serde_json::from_str(json).unwrap();

        let MediaItem::Gallery(gallery) = item else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.base_src.as_deref(), Some("media/Proj X"));
        assert!(gallery.images.is_empty());
    }

    #[test]
    fn test_gallery_with_manifest_images() {
        let json = r#"{
            "type": "gallery",
            "alt": "Shots",
            "baseSrc": "media/app",
            "images": ["media/app/1.png", "media/app/2.png"]
        }"#;

        let item: MediaItem = serde_json::from_str(json).unwrap();

        let MediaItem::Gallery(gallery) = item else {
            panic!("expected gallery");
        };
        assert_eq!(gallery.first_image(), Some("media/app/1.png"));
    }

    #[test]
    fn test_gallery_without_folder_or_images() {
        let json = r#"{"type": "gallery", "alt": "Empty"}"#;

        let item: MediaItem = serde_json::from_str(json).unwrap();

        assert_eq!(
            item,
            MediaItem::Gallery(Gallery {
                alt: "Empty".to_string(),
                title: None,
                base_src: None,
                images: Vec::new(),
            })
        );
    }

    #[test]
    fn test_unknown_type_does_not_fail() {
        let json = r#"{"type": "hologram", "src": "x"}"#;

        let item: MediaItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.kind(), MediaKind::Unknown);
        assert_eq!(item.alt(), "");
    }

    #[test]
    fn test_gallery_serializes_base_src() {
        let item = MediaItem::Gallery(Gallery::unresolved("media/app", "Shots"));

        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["type"], "gallery");
        assert_eq!(value["baseSrc"], "media/app");
    }
}
