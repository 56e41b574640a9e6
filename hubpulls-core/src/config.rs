//! Configuration loading and management
//!
//! Configuration is loaded from `hubpulls.toml` in the working directory.
//! Every section is optional; a missing file means all defaults.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Docker Hub listing of the curated `library` namespace
pub const DEFAULT_BASE_URL: &str = "https://hub.docker.com/v2/repositories/library/";

/// Main configuration struct
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Listing endpoint settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Snapshot and interval directories
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry listing endpoint configuration
#[derive(Debug, Deserialize, Clone)]
pub struct RegistryConfig {
    /// Base listing URL; `page_size` and `page` are appended as query parameters
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records requested per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl RegistryConfig {
    /// Validate configuration, returning error message if invalid
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("registry.base_url must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(Error::Config(
                "registry.page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    100
}

/// Where snapshots and interval diffs are written
#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Full ranked snapshots
    #[serde(default = "default_cumulative_dir")]
    pub cumulative_dir: PathBuf,

    /// Diffs between consecutive snapshots
    #[serde(default = "default_interval_dir")]
    pub interval_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cumulative_dir: default_cumulative_dir(),
            interval_dir: default_interval_dir(),
        }
    }
}

fn default_cumulative_dir() -> PathBuf {
    PathBuf::from("cumulative_pulls")
}

fn default_interval_dir() -> PathBuf {
    PathBuf::from("interval_pulls")
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional directory for a daily-rotated log file, in addition to stderr
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        config.registry.validate()?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `./hubpulls.toml`, relative to the working directory
    pub fn config_path() -> PathBuf {
        PathBuf::from("hubpulls.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.registry.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.registry.page_size, 100);
        assert_eq!(
            config.storage.cumulative_dir,
            PathBuf::from("cumulative_pulls")
        );
        assert_eq!(config.storage.interval_dir, PathBuf::from("interval_pulls"));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.directory.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[registry]
base_url = "http://127.0.0.1:8080/v2/repositories/library/"
page_size = 25

[storage]
cumulative_dir = "/var/lib/hubpulls/cumulative"

[logging]
level = "debug"
directory = "/var/log/hubpulls"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.registry.page_size, 25);
        assert_eq!(
            config.storage.cumulative_dir,
            PathBuf::from("/var/lib/hubpulls/cumulative")
        );
        // unset keys in a present section still default
        assert_eq!(config.storage.interval_dir, PathBuf::from("interval_pulls"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.directory.as_deref(),
            Some(Path::new("/var/log/hubpulls"))
        );
    }

    #[test]
    fn test_registry_validation() {
        assert!(RegistryConfig::default().validate().is_ok());

        let config = RegistryConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = RegistryConfig {
            base_url: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_rejects_zero_page_size() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hubpulls.toml");
        std::fs::write(&path, "[registry]\npage_size = 0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("hubpulls.toml");
        std::fs::write(&path, "[registry\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }
}
