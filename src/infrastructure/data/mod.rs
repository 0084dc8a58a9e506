//! Portfolio data documents and media folders.

pub mod json_store;
pub mod media_directory;

pub use json_store::JsonDataStore;
pub use media_directory::FsMediaDirectory;
