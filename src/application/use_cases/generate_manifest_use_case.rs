//! Media manifest generation use case.
//!
//! Rewrites gallery entries of the data documents so that each carries the
//! image list of its folder, letting the resolver skip probing.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, error, info, warn};

use crate::domain::errors::CatalogError;
use crate::domain::ports::{DocumentStorePort, MediaDirectoryPort};

/// Data documents processed by default.
pub const DEFAULT_DATA_FILES: [&str; 2] = ["projects.json", "achievements.json"];

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Manifest generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRequest {
    /// Document file names; each must hold an array under its file stem.
    pub data_files: Vec<String>,
    /// Also re-scan galleries that already carry `baseSrc`.
    pub refresh: bool,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

impl Default for ManifestRequest {
    fn default() -> Self {
        Self {
            data_files: DEFAULT_DATA_FILES.iter().map(ToString::to_string).collect(),
            refresh: false,
            dry_run: false,
        }
    }
}

/// Result for one data document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileManifest {
    /// Document file name.
    pub name: String,
    /// Galleries rewritten.
    pub galleries: usize,
    /// Images listed across those galleries.
    pub images: usize,
    /// Whether the document was written back.
    pub written: bool,
    /// Why the document was skipped, if it was.
    pub skipped: Option<String>,
}

impl FileManifest {
    fn skipped(name: &str, reason: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            galleries: 0,
            images: 0,
            written: false,
            skipped: Some(reason.into()),
        }
    }
}

/// Populates gallery image lists from media folders.
#[derive(Clone)]
pub struct GenerateManifestUseCase {
    documents: Arc<dyn DocumentStorePort>,
    directory: Arc<dyn MediaDirectoryPort>,
}

impl GenerateManifestUseCase {
    /// Creates new manifest use case.
    #[must_use]
    pub const fn new(
        documents: Arc<dyn DocumentStorePort>,
        directory: Arc<dyn MediaDirectoryPort>,
    ) -> Self {
        Self {
            documents,
            directory,
        }
    }

    /// Processes every requested document.
    ///
    /// A failing document is logged and reported; the others still run.
    pub async fn execute(&self, request: &ManifestRequest) -> Vec<FileManifest> {
        info!(files = request.data_files.len(), "Starting media manifest generation");

        let mut results = Vec::with_capacity(request.data_files.len());
        for name in &request.data_files {
            let result = match self.process_file(name, request).await {
                Ok(manifest) => manifest,
                Err(e @ CatalogError::MissingKey { .. }) => {
                    warn!(file = %name, error = %e, "Skipping data document");
                    FileManifest::skipped(name, e.to_string())
                }
                Err(e) => {
                    error!(file = %name, error = %e, "Failed to process data document");
                    FileManifest::skipped(name, e.to_string())
                }
            };
            results.push(result);
        }

        info!("Media manifest generation complete");
        results
    }

    async fn process_file(
        &self,
        name: &str,
        request: &ManifestRequest,
    ) -> Result<FileManifest, CatalogError> {
        debug!(file = %name, "Processing data document");
        let mut document = self.documents.read_document(name)?;

        let key = Path::new(name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some(items) = document.get_mut(&key).and_then(Value::as_array_mut) else {
            return Err(CatalogError::MissingKey {
                path: name.into(),
                key,
            });
        };

        let mut manifest = FileManifest {
            name: name.to_string(),
            galleries: 0,
            images: 0,
            written: false,
            skipped: None,
        };

        for item in items.iter_mut() {
            let label = item
                .get("title")
                .or_else(|| item.get("name"))
                .and_then(Value::as_str)
                .unwrap_or("untitled")
                .to_string();
            let Some(media) = item.get_mut("media").and_then(Value::as_array_mut) else {
                continue;
            };

            for entry in media.iter_mut() {
                let Some(folder) = gallery_folder(entry, request.refresh) else {
                    continue;
                };
                debug!(item = %label, folder = %folder, "Found gallery");

                let mut images = match self.directory.list_images(&folder).await {
                    Ok(images) => images,
                    Err(e) => {
                        warn!(folder = %folder, error = %e, "Could not read media folder");
                        Vec::new()
                    }
                };
                sort_naturally(&mut images);

                info!(item = %label, folder = %folder, images = images.len(), "Populated gallery");
                manifest.galleries += 1;
                manifest.images += images.len();
                *entry = gallery_entry(entry, &folder, images);
            }
        }

        if manifest.galleries > 0 && !request.dry_run {
            self.documents.write_document(name, &document)?;
            manifest.written = true;
        }

        info!(
            file = %name,
            galleries = manifest.galleries,
            images = manifest.images,
            written = manifest.written,
            "Finished data document"
        );
        Ok(manifest)
    }
}

/// Returns the folder of a gallery entry that needs (re)scanning.
fn gallery_folder(entry: &Value, refresh: bool) -> Option<String> {
    if entry.get("type").and_then(Value::as_str) != Some("gallery") {
        return None;
    }
    if let Some(src) = entry.get("src").and_then(Value::as_str) {
        return Some(src.to_string());
    }
    if refresh {
        return entry
            .get("baseSrc")
            .and_then(Value::as_str)
            .map(ToString::to_string);
    }
    None
}

fn gallery_entry(previous: &Value, folder: &str, images: Vec<String>) -> Value {
    let mut entry = Map::new();
    entry.insert("type".to_string(), Value::from("gallery"));
    entry.insert(
        "alt".to_string(),
        previous.get("alt").cloned().unwrap_or_else(|| Value::from("")),
    );
    if let Some(title) = previous.get("title") {
        entry.insert("title".to_string(), title.clone());
    }
    entry.insert("baseSrc".to_string(), Value::from(folder));
    entry.insert(
        "images".to_string(),
        Value::Array(images.into_iter().map(Value::from).collect()),
    );
    Value::Object(entry)
}

/// Orders paths by the first number in their file name; no number counts as 0.
fn sort_naturally(images: &mut [String]) {
    images.sort_by_key(|path| {
        let file_name = path.rsplit('/').next().unwrap_or(path);
        NUMBER_RE
            .find(file_name)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockDocumentStore, MockMediaDirectory};
    use serde_json::json;

    fn use_case(
        documents: Arc<MockDocumentStore>,
        directory: MockMediaDirectory,
    ) -> GenerateManifestUseCase {
        GenerateManifestUseCase::new(documents, Arc::new(directory))
    }

    fn request(files: &[&str]) -> ManifestRequest {
        ManifestRequest {
            data_files: files.iter().map(ToString::to_string).collect(),
            ..ManifestRequest::default()
        }
    }

    #[test]
    fn test_sort_naturally() {
        let mut images = vec![
            "m/10.png".to_string(),
            "m/cover.png".to_string(),
            "m/2.png".to_string(),
            "m/1.png".to_string(),
        ];

        sort_naturally(&mut images);

        assert_eq!(images, vec!["m/cover.png", "m/1.png", "m/2.png", "m/10.png"]);
    }

    #[tokio::test]
    async fn test_populates_gallery_and_keeps_other_fields() {
        let documents = Arc::new(MockDocumentStore::new().with_document(
            "projects.json",
            json!({
                "projects": [{
                    "id": 1,
                    "title": "Tracker",
                    "technologies": ["Rust"],
                    "media": [
                        {"type": "image", "src": "/cover.png", "alt": "Cover"},
                        {"type": "gallery", "src": "media/Tracker", "alt": "Shots", "title": "Screens"}
                    ]
                }]
            }),
        ));
        let directory =
            MockMediaDirectory::new().with_folder("media/Tracker", &["10.png", "2.png", "1.jpg"]);

        let results = use_case(documents.clone(), directory)
            .execute(&request(&["projects.json"]))
            .await;

        assert_eq!(results[0].galleries, 1);
        assert_eq!(results[0].images, 3);
        assert!(results[0].written);

        let document = documents.document("projects.json").unwrap();
        assert_eq!(document["projects"][0]["technologies"], json!(["Rust"]));
        assert_eq!(document["projects"][0]["media"][0]["src"], "/cover.png");
        assert_eq!(
            document["projects"][0]["media"][1],
            json!({
                "type": "gallery",
                "alt": "Shots",
                "title": "Screens",
                "baseSrc": "media/Tracker",
                "images": ["media/Tracker/1.jpg", "media/Tracker/2.png", "media/Tracker/10.png"]
            })
        );
    }

    #[tokio::test]
    async fn test_unreadable_folder_gives_empty_list() {
        let documents = Arc::new(MockDocumentStore::new().with_document(
            "achievements.json",
            json!({"achievements": [{"id": 1, "media": [{"type": "gallery", "src": "media/none", "alt": "A"}]}]}),
        ));

        let results = use_case(documents.clone(), MockMediaDirectory::new())
            .execute(&request(&["achievements.json"]))
            .await;

        assert_eq!(results[0].galleries, 1);
        let document = documents.document("achievements.json").unwrap();
        assert_eq!(document["achievements"][0]["media"][0]["images"], json!([]));
        assert_eq!(document["achievements"][0]["media"][0]["baseSrc"], "media/none");
    }

    #[tokio::test]
    async fn test_processed_galleries_are_left_alone_without_refresh() {
        let original = json!({"projects": [{"id": 1, "media": [
            {"type": "gallery", "alt": "A", "baseSrc": "media/a", "images": ["media/a/1.png"]}
        ]}]});
        let documents =
            Arc::new(MockDocumentStore::new().with_document("projects.json", original.clone()));
        let directory = MockMediaDirectory::new().with_folder("media/a", &["1.png", "2.png"]);

        let results = use_case(documents.clone(), directory)
            .execute(&request(&["projects.json"]))
            .await;

        assert_eq!(results[0].galleries, 0);
        assert!(!results[0].written);
        assert!(documents.writes().is_empty());
        assert_eq!(documents.document("projects.json"), Some(original));
    }

    #[tokio::test]
    async fn test_refresh_rescans_processed_galleries() {
        let documents = Arc::new(MockDocumentStore::new().with_document(
            "projects.json",
            json!({"projects": [{"id": 1, "media": [
                {"type": "gallery", "alt": "A", "baseSrc": "media/a", "images": ["media/a/1.png"]}
            ]}]}),
        ));
        let directory = MockMediaDirectory::new().with_folder("media/a", &["1.png", "2.png"]);
        let request = ManifestRequest {
            refresh: true,
            ..request(&["projects.json"])
        };

        use_case(documents.clone(), directory).execute(&request).await;

        let document = documents.document("projects.json").unwrap();
        assert_eq!(
            document["projects"][0]["media"][0]["images"],
            json!(["media/a/1.png", "media/a/2.png"])
        );
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let documents = Arc::new(MockDocumentStore::new().with_document(
            "projects.json",
            json!({"projects": [{"id": 1, "media": [{"type": "gallery", "src": "media/a", "alt": "A"}]}]}),
        ));
        let directory = MockMediaDirectory::new().with_folder("media/a", &["1.png"]);
        let request = ManifestRequest {
            dry_run: true,
            ..request(&["projects.json"])
        };

        let results = use_case(documents.clone(), directory).execute(&request).await;

        assert_eq!(results[0].images, 1);
        assert!(!results[0].written);
        assert!(documents.writes().is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_and_missing_file_do_not_stop_others() {
        let documents = Arc::new(
            MockDocumentStore::new()
                .with_document("projects.json", json!({"items": []}))
                .with_document(
                    "achievements.json",
                    json!({"achievements": [{"id": 1, "media": [{"type": "gallery", "src": "media/a", "alt": "A"}]}]}),
                ),
        );
        let directory = MockMediaDirectory::new().with_folder("media/a", &["1.png"]);

        let results = use_case(documents.clone(), directory)
            .execute(&request(&["projects.json", "missing.json", "achievements.json"]))
            .await;

        assert!(results[0].skipped.is_some());
        assert!(results[1].skipped.is_some());
        assert!(results[2].written);
        assert_eq!(documents.writes(), vec!["achievements.json".to_string()]);
    }
}
