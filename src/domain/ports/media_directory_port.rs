//! Port definition for media folder listing.

use async_trait::async_trait;

use crate::domain::errors::CatalogError;

/// Lists the image files of a site media folder.
#[async_trait]
pub trait MediaDirectoryPort: Send + Sync {
    /// Returns site-relative paths (`folder/file.ext`) of the image files in
    /// `folder`, in directory order.
    async fn list_images(&self, folder: &str) -> Result<Vec<String>, CatalogError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;

    /// In-memory folder listing.
    #[derive(Default)]
    pub struct MockMediaDirectory {
        folders: HashMap<String, Vec<String>>,
    }

    impl MockMediaDirectory {
        /// Creates an empty listing; every folder is unreadable.
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers `files` (bare names) under `folder`.
        pub fn with_folder(mut self, folder: &str, files: &[&str]) -> Self {
            let paths = files.iter().map(|file| format!("{folder}/{file}")).collect();
            self.folders.insert(folder.to_string(), paths);
            self
        }
    }

    #[async_trait]
    impl MediaDirectoryPort for MockMediaDirectory {
        async fn list_images(&self, folder: &str) -> Result<Vec<String>, CatalogError> {
            self.folders.get(folder).cloned().ok_or_else(|| {
                CatalogError::read(
                    folder,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such folder"),
                )
            })
        }
    }
}
