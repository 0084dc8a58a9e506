use super::app_config::AppConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config path given and no home directory to derive one from")]
    NoConfigPath,
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Loads `config.toml` for the CLI.
pub struct StorageManager {
    config_path: PathBuf,
}

impl StorageManager {
    /// Uses `path_override` if given, else the platform config location.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigPath` if neither is available.
    pub fn new(path_override: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = path_override
            .or_else(AppConfig::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;
        Ok(Self { config_path })
    }

    /// Path the configuration is read from.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the application configuration.
    ///
    /// A missing file is created with defaults; a malformed one is left
    /// untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot
    /// be written.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let path = &self.config_path;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Config file not found, creating default");
                let config = AppConfig::default();
                self.write_default(&config)?;
                return Ok(config);
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
            AppConfig::default()
        }))
    }

    fn write_default(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let path = &self.config_path;
        let content = toml::to_string_pretty(config)?;
        let dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;

        let mut temp_file =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::io(path, e))?;
        temp_file
            .persist(path)
            .map_err(|e| ConfigError::io(path, e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_writes_default_in_new_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("folio").join("config.toml");
        let manager = StorageManager::new(Some(path.clone())).unwrap();

        let config = manager.load_config().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(manager.load_config().unwrap(), config);
    }

    #[test]
    fn test_malformed_file_falls_back_and_is_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "base_path = [").unwrap();
        let manager = StorageManager::new(Some(path.clone())).unwrap();

        let config = manager.load_config().unwrap();

        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "base_path = [");
    }

    #[test]
    fn test_reads_site_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(
            &path,
            "site_url = \"https://example.com\"\n\n[probe]\ntimeout_secs = 3\n",
        )
        .unwrap();
        let manager = StorageManager::new(Some(path.clone())).unwrap();

        let config = manager.load_config().unwrap();

        assert_eq!(manager.config_path(), path);
        assert_eq!(config.site_url.as_deref(), Some("https://example.com"));
        assert_eq!(config.probe.timeout_secs, 3);
    }

    #[test]
    fn test_directory_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::new(Some(dir.path().to_path_buf())).unwrap();

        assert!(matches!(
            manager.load_config(),
            Err(ConfigError::Io { .. })
        ));
    }
}
