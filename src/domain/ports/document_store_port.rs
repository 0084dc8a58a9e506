//! Port definition for raw data document access.

use serde_json::Value;

use crate::domain::errors::CatalogError;

/// Reads and rewrites JSON data documents by file name.
pub trait DocumentStorePort: Send + Sync {
    /// Reads and parses a document.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid JSON.
    fn read_document(&self, name: &str) -> Result<Value, CatalogError>;

    /// Replaces a document atomically.
    ///
    /// # Errors
    /// Returns error if the file cannot be written.
    fn write_document(&self, name: &str, document: &Value) -> Result<(), CatalogError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    /// In-memory document store.
    #[derive(Default)]
    pub struct MockDocumentStore {
        documents: Mutex<HashMap<String, Value>>,
        writes: Mutex<Vec<String>>,
    }

    impl MockDocumentStore {
        /// Creates an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Adds a document.
        pub fn with_document(self, name: &str, document: Value) -> Self {
            self.documents.lock().insert(name.to_string(), document);
            self
        }

        /// Returns the current version of a document.
        pub fn document(&self, name: &str) -> Option<Value> {
            self.documents.lock().get(name).cloned()
        }

        /// Names written so far, in order.
        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().clone()
        }
    }

    impl DocumentStorePort for MockDocumentStore {
        fn read_document(&self, name: &str) -> Result<Value, CatalogError> {
            self.document(name).ok_or_else(|| {
                CatalogError::read(
                    name,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
                )
            })
        }

        fn write_document(&self, name: &str, document: &Value) -> Result<(), CatalogError> {
            self.documents
                .lock()
                .insert(name.to_string(), document.clone());
            self.writes.lock().push(name.to_string());
            Ok(())
        }
    }
}
