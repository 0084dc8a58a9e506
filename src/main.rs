use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use folio_media::application::services::{ExistenceProbe, prefix_path};
use folio_media::application::use_cases::{GenerateManifestUseCase, ResolveThumbnailsUseCase};
use folio_media::application::ThumbnailReport;
use folio_media::domain::ports::ImageProbePort;
use folio_media::infrastructure::{
    AppConfig, CliArgs, Command, FsImageProbe, FsMediaDirectory, HttpImageProbe, JsonDataStore,
    MemoryResolutionCache, RoutingImageProbe, StorageManager,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, StorageManager)> {
    let storage = StorageManager::new(args.config.clone())?;
    let mut config = storage.load_config()?;
    config.merge_with_args(args);
    Ok((config, storage))
}

fn build_probe(config: &AppConfig) -> Result<Arc<dyn ImageProbePort>> {
    let http = Arc::new(
        HttpImageProbe::new(config.probe_timeout(), config.site_url.clone())
            .wrap_err("Failed to create HTTP probe")?,
    );
    let local: Arc<dyn ImageProbePort> = if config.site_url.is_some() {
        http.clone()
    } else {
        Arc::new(FsImageProbe::new(config.public_dir.clone()))
    };

    Ok(Arc::new(
        RoutingImageProbe::new().with_local(local).with_remote(http),
    ))
}

async fn run_resolve(config: &AppConfig, json: bool) -> Result<()> {
    let store = JsonDataStore::new(config.data_dir.clone());
    let catalog = store.load_catalog()?;

    let cache = Arc::new(MemoryResolutionCache::new());
    let use_case = ResolveThumbnailsUseCase::new(
        ExistenceProbe::new(build_probe(config)?),
        cache.clone(),
        config.resolve_options(),
    );

    let reports: Vec<ThumbnailReport> = use_case
        .resolve_catalog(&catalog)
        .await
        .into_iter()
        .map(|mut report| {
            if let Some(thumbnail) = report.thumbnail.as_mut() {
                thumbnail.url = prefix_path(&config.base_path, &thumbnail.url);
            }
            report
        })
        .collect();
    debug!(stats = %cache.stats(), "Resolution cache");

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        let url = report
            .thumbnail
            .as_ref()
            .map_or("-", |thumbnail| thumbnail.url.as_str());
        println!(
            "{:<13} {:>5}  {:<16} {:<40} {}",
            report.kind.as_str(),
            report.id.to_string(),
            report.origin.description(),
            report.label,
            url
        );
    }
    let placeholders = reports
        .iter()
        .filter(|report| !report.has_thumbnail())
        .count();
    println!(
        "\n{} subjects, {} with thumbnail, {} placeholder",
        reports.len(),
        reports.len() - placeholders,
        placeholders
    );
    Ok(())
}

async fn run_manifest(config: &AppConfig, refresh: bool, dry_run: bool) -> Result<()> {
    let use_case = GenerateManifestUseCase::new(
        Arc::new(JsonDataStore::new(config.data_dir.clone())),
        Arc::new(FsMediaDirectory::new(config.public_dir.clone())),
    );

    let results = use_case
        .execute(&config.manifest_request(refresh, dry_run))
        .await;

    for result in &results {
        match &result.skipped {
            Some(reason) => println!("{}: skipped ({reason})", result.name),
            None => println!(
                "{}: {} galleries, {} images{}",
                result.name,
                result.galleries,
                result.images,
                if result.written {
                    ""
                } else if dry_run {
                    " (dry run)"
                } else {
                    " (unchanged)"
                }
            ),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, storage) = load_config(&args)?;

    init_logging(&config)?;

    info!(
        version = folio_media::VERSION,
        config = %storage.config_path().display(),
        "Starting {}",
        folio_media::NAME
    );

    match args.command {
        Command::Resolve { json } => run_resolve(&config, json).await,
        Command::Manifest { refresh, dry_run } => run_manifest(&config, refresh, dry_run).await,
    }
}
