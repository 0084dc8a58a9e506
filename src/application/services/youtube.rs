//! YouTube video id extraction and thumbnail URLs.

use std::sync::LazyLock;

use regex::Regex;

use super::fallback_chain::FallbackChain;

const THUMBNAIL_HOST: &str = "https://img.youtube.com/vi";

/// Accepts `watch?v=`, `youtu.be/`, `/embed/` and `/v/` forms.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .unwrap()
});

static THUMBNAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://img\.youtube\.com/vi/([^/]{11})/maxresdefault\.jpg$").unwrap()
});

/// Thumbnail renditions published by YouTube, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// 1280x720, missing for some uploads.
    MaxRes,
    /// 480x360.
    High,
    /// 320x180.
    Medium,
    /// 120x90, always present.
    Default,
}

impl ThumbnailQuality {
    /// Fallback order.
    pub const CHAIN: [Self; 4] = [Self::MaxRes, Self::High, Self::Medium, Self::Default];

    /// File name of the rendition.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::MaxRes => "maxresdefault.jpg",
            Self::High => "hqdefault.jpg",
            Self::Medium => "mqdefault.jpg",
            Self::Default => "default.jpg",
        }
    }
}

/// Extracts the 11-character video id from a YouTube URL.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Builds the thumbnail URL of `video_id` at `quality`.
#[must_use]
pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("{THUMBNAIL_HOST}/{video_id}/{}", quality.file_name())
}

/// Returns the canonical thumbnail of a YouTube video URL.
#[must_use]
pub fn thumbnail_for_video(video_url: &str) -> Option<String> {
    extract_video_id(video_url).map(|id| thumbnail_url(id, ThumbnailQuality::MaxRes))
}

/// Builds the full fallback chain for `video_id`.
#[must_use]
pub fn fallback_chain(video_id: &str) -> FallbackChain {
    FallbackChain::new(
        ThumbnailQuality::CHAIN
            .iter()
            .map(|quality| thumbnail_url(video_id, *quality))
            .collect(),
    )
}

/// Rebuilds the fallback chain from a canonical thumbnail URL.
///
/// Returns `None` for anything that is not a `maxresdefault` YouTube thumbnail.
#[must_use]
pub fn fallback_chain_for(thumbnail: &str) -> Option<FallbackChain> {
    THUMBNAIL_RE
        .captures(thumbnail)
        .and_then(|caps| caps.get(1))
        .map(|id| fallback_chain(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("https://youtu.be/dQw4w9WgXcQ", Some("dQw4w9WgXcQ") ; "short_link")]
    #[test_case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ") ; "watch")]
    #[test_case("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", Some("dQw4w9WgXcQ") ; "watch_second_param")]
    #[test_case("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1", Some("dQw4w9WgXcQ") ; "embed")]
    #[test_case("https://youtube.com/v/dQw4w9WgXcQ", Some("dQw4w9WgXcQ") ; "v_path")]
    #[test_case("https://youtu.be/short", None ; "too_short")]
    #[test_case("https://vimeo.com/123456789", None ; "other_host")]
    #[test_case("/media/demo.mp4", None ; "local_file")]
    fn test_extract_video_id(url: &str, expected: Option<&str>) {
        assert_eq!(extract_video_id(url), expected);
    }

    #[test]
    fn test_thumbnail_for_short_link() {
        assert_eq!(
            thumbnail_for_video("https://youtu.be/dQw4w9WgXcQ").as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg")
        );
    }

    #[test]
    fn test_fallback_chain_order() {
        let chain = fallback_chain("dQw4w9WgXcQ");

        let names: Vec<_> = chain
            .candidates()
            .iter()
            .map(|url| url.rsplit('/').next().unwrap_or_default())
            .collect();
        assert_eq!(
            names,
            vec!["maxresdefault.jpg", "hqdefault.jpg", "mqdefault.jpg", "default.jpg"]
        );
    }

    #[test]
    fn test_fallback_chain_for_thumbnail_url() {
        let chain =
            fallback_chain_for("https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg");

        assert_eq!(chain, Some(fallback_chain("dQw4w9WgXcQ")));
        assert!(fallback_chain_for("https://example.com/cover.jpg").is_none());
    }
}
