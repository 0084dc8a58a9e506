//! Deployment base-path prefixing for site-relative URLs.

/// Prefixes `path` with the site's base path.
///
/// Absolute http(s) URLs are returned unchanged.
#[must_use]
pub fn prefix_path(base_path: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    let separator = if path.starts_with('/') { "" } else { "/" };
    format!("{base_path}{separator}{path}")
}
