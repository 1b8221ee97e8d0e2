//! Configuration file loading
//!
//! Finds and parses a `config.toml` (or `config.json`) from the usual
//! per-user locations. A missing file yields the default configuration; an
//! unreadable or malformed file is logged and skipped so the application
//! keeps running with whatever the next location (or the defaults) provide.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Configuration file loader
pub struct ConfigLoader {
    /// Search paths for configuration files, in precedence order
    search_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigLoader {
    /// Create a loader with the default search paths
    pub fn new() -> Self {
        Self {
            search_paths: Self::default_search_paths(),
        }
    }

    /// Create a loader that only looks in the given directory (for tests)
    pub fn with_search_path(path: PathBuf) -> Self {
        Self {
            search_paths: vec![path],
        }
    }

    /// Load configuration from the first readable file found, falling back
    /// to defaults when no file exists.
    pub fn load(&self) -> Config {
        for dir in &self.search_paths {
            for format in [ConfigFormat::Toml, ConfigFormat::Json] {
                let path = dir.join(format.file_name());
                if !path.exists() {
                    continue;
                }
                match Self::load_file(&path, format) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Skipping config at {}: {}", path.display(), e);
                        continue;
                    }
                }
            }
        }
        Config::default()
    }

    /// Load configuration from an explicit path, inferring the format from
    /// the file extension (TOML unless the extension is `json`).
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let format = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        };
        Self::load_file(path, format)
    }

    fn load_file(path: &Path, format: ConfigFormat) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        match format {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            }),
            ConfigFormat::Json => {
                serde_json::from_str(&content).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Default search paths, most specific first
    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("tabssh"));
        }

        if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("tabssh"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tabssh"));
            paths.push(home.join(".tabssh"));
        }

        paths
    }

    /// List all search paths
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFormat {
    fn file_name(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "config.toml",
            ConfigFormat::Json => "config.json",
        }
    }
}
