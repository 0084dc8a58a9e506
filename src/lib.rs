//! Folio Media - thumbnail resolution for static portfolio sites.
//!
//! This crate picks a representative thumbnail for every portfolio subject
//! (projects, achievements, experience entries and so on) from its media list,
//! probes gallery folders for a loadable image when no list is available, and
//! memoizes the outcome. It also generates the gallery image manifest that lets
//! the site skip probing altogether.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services, use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing filesystem, HTTP and in-memory adapters.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "folio-media";
