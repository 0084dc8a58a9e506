//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::application::use_cases::{
    DEFAULT_DATA_FILES, DEFAULT_MAX_CONCURRENT_PROBES, ManifestRequest, ResolveOptions,
};
use crate::infrastructure::probe::http_probe::DEFAULT_TIMEOUT_SECS;

const APP_NAME: &str = "folio-media";
const APP_QUALIFIER: &str = "dev";
const APP_ORGANIZATION: &str = "folio";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Directory holding the portfolio JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory site-relative media paths resolve against.
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// Origin for probing site-relative paths over HTTP instead of the
    /// public directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    /// Path prefix the site is deployed under.
    #[serde(default)]
    pub base_path: String,

    /// Probe configuration.
    #[serde(default)]
    pub probe: ProbeConfig,

    /// Manifest generation configuration.
    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Probe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Per-request timeout for remote probes, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Subjects probed at the same time.
    #[serde(default = "default_max_concurrent_probes")]
    pub max_concurrent_probes: usize,

    /// Walk the YouTube rendition chain instead of trusting `maxresdefault`.
    #[serde(default)]
    pub verify_video_thumbnails: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_concurrent_probes: default_max_concurrent_probes(),
            verify_video_thumbnails: false,
        }
    }
}

/// Manifest generation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Data documents whose galleries are populated.
    #[serde(default = "default_data_files")]
    pub data_files: Vec<String>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            data_files: default_data_files(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("public/data")
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_max_concurrent_probes() -> usize {
    DEFAULT_MAX_CONCURRENT_PROBES
}

fn default_data_files() -> Vec<String> {
    DEFAULT_DATA_FILES.iter().map(ToString::to_string).collect()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(data_dir) = &args.data_dir {
            self.data_dir = data_dir.clone();
        }
        if let Some(public_dir) = &args.public_dir {
            self.public_dir = public_dir.clone();
        }
        if let Some(site_url) = &args.site_url {
            self.site_url = Some(site_url.clone());
        }
        if let Some(base_path) = &args.base_path {
            self.base_path = base_path.clone();
        }
        if let Some(timeout) = args.timeout {
            self.probe.timeout_secs = timeout;
        }
        if let Some(max_concurrent) = args.max_concurrent_probes {
            self.probe.max_concurrent_probes = max_concurrent;
        }
        if let Some(verify) = args.verify_video_thumbnails {
            self.probe.verify_video_thumbnails = verify;
        }
    }

    /// Returns the platform config file path, if a home directory exists.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Returns the remote probe timeout.
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe.timeout_secs)
    }

    /// Builds resolution options from the probe section.
    #[must_use]
    pub const fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            max_concurrent_probes: self.probe.max_concurrent_probes,
            verify_video_thumbnails: self.probe.verify_video_thumbnails,
        }
    }

    /// Builds a manifest request from the manifest section.
    #[must_use]
    pub fn manifest_request(&self, refresh: bool, dry_run: bool) -> ManifestRequest {
        ManifestRequest {
            data_files: self.manifest.data_files.clone(),
            refresh,
            dry_run,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            data_dir: default_data_dir(),
            public_dir: default_public_dir(),
            site_url: None,
            base_path: String::new(),
            probe: ProbeConfig::default(),
            manifest: ManifestConfig::default(),
        }
    }
}
