//! Media folder listing on the local filesystem.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::trace;

use crate::domain::errors::CatalogError;
use crate::domain::ports::MediaDirectoryPort;

/// File extensions treated as gallery images.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "gif", "svg"];

/// Lists gallery folders under the site's public directory.
#[derive(Debug, Clone)]
pub struct FsMediaDirectory {
    public_dir: PathBuf,
}

impl FsMediaDirectory {
    /// Creates a lister rooted at `public_dir`.
    #[must_use]
    pub const fn new(public_dir: PathBuf) -> Self {
        Self { public_dir }
    }
}

fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    })
}

#[async_trait]
impl MediaDirectoryPort for FsMediaDirectory {
    async fn list_images(&self, folder: &str) -> Result<Vec<String>, CatalogError> {
        let relative = folder.trim_matches('/');
        let full_path = self.public_dir.join(relative);

        let mut entries = fs::read_dir(&full_path)
            .await
            .map_err(|e| CatalogError::read(&full_path, e))?;

        let mut images = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CatalogError::read(&full_path, e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_image_file(&name) {
                images.push(format!("{}/{name}", folder.trim_end_matches('/')));
            }
        }

        trace!(folder = %folder, count = images.len(), "Listed media folder");
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_file() {
        assert!(is_image_file("1.PNG"));
        assert!(is_image_file("cover.webp"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("png"));
    }

    #[tokio::test]
    async fn test_list_images_filters_and_keeps_folder_prefix()
    -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let folder = dir.path().join("media").join("Proj X");
        std::fs::create_dir_all(&folder)?;
        std::fs::write(folder.join("2.png"), b"x")?;
        std::fs::write(folder.join("1.JPG"), b"x")?;
        std::fs::write(folder.join("readme.md"), b"x")?;
        let lister = FsMediaDirectory::new(dir.path().to_path_buf());

        let mut images = lister.list_images("/media/Proj X").await?;
        images.sort();

        assert_eq!(images, vec!["/media/Proj X/1.JPG", "/media/Proj X/2.png"]);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_folder_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let lister = FsMediaDirectory::new(dir.path().to_path_buf());

        let err = lister.list_images("media/none").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
