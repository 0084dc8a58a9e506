use super::app_config::LogLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "folio-media",
    version,
    about = "Thumbnail resolution and media manifests for static portfolio sites",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the portfolio JSON documents.
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory site-relative media paths resolve against.
    #[arg(long, value_name = "PATH", global = true)]
    pub public_dir: Option<PathBuf>,

    /// Probe site-relative paths against this origin over HTTP.
    #[arg(long, value_name = "URL", env = "FOLIO_SITE_URL", global = true)]
    pub site_url: Option<String>,

    /// Path prefix the site is deployed under.
    #[arg(long, value_name = "PATH", env = "FOLIO_BASE_PATH", global = true)]
    pub base_path: Option<String>,

    /// Remote probe timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Subjects probed at the same time.
    #[arg(long, value_name = "N", global = true)]
    pub max_concurrent_probes: Option<usize>,

    /// Walk the YouTube rendition chain instead of trusting `maxresdefault`.
    #[arg(long, global = true)]
    pub verify_video_thumbnails: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Resolve a thumbnail for every portfolio subject.
    Resolve {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Populate gallery image lists from media folders.
    Manifest {
        /// Re-scan galleries that already list their images.
        #[arg(long)]
        refresh: bool,
        /// Report what would change without writing.
        #[arg(long)]
        dry_run: bool,
    },
}
