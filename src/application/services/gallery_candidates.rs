//! Conventional thumbnail names probed inside a gallery folder.

/// File stems tried in order.
pub const CANDIDATE_STEMS: [&str; 5] = ["1", "screenshot", "demo", "main", "hero"];

/// Extensions tried for each stem, in order.
pub const CANDIDATE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Percent-encodes every segment of a folder path independently.
///
/// Separators are kept, so `Media/Proj X` becomes `Media/Proj%20X`.
#[must_use]
pub fn encode_folder_path(folder: &str) -> String {
    folder
        .trim_end_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Builds the ordered candidate list for a gallery folder.
#[must_use]
pub fn gallery_candidates(folder: &str) -> Vec<String> {
    let base = encode_folder_path(folder);
    CANDIDATE_STEMS
        .iter()
        .flat_map(|stem| {
            let base = &base;
            CANDIDATE_EXTENSIONS
                .iter()
                .map(move |ext| format!("{base}/{stem}.{ext}"))
        })
        .collect()
}
