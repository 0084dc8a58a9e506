mod document_store_port;
mod image_probe_port;
mod media_directory_port;
mod resolution_cache_port;

pub use document_store_port::DocumentStorePort;
pub use image_probe_port::{ImageProbePort, ProbeError, ProbeResult};
pub use media_directory_port::MediaDirectoryPort;
pub use resolution_cache_port::ResolutionCachePort;

#[cfg(test)]
pub mod mocks {
    pub use super::document_store_port::mock::MockDocumentStore;
    pub use super::image_probe_port::mock::ScriptedProbe;
    pub use super::media_directory_port::mock::MockMediaDirectory;
}
