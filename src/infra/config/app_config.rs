use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use lakeview_app::settings::Settings;

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const URL_ENV_VAR: &str = "LAKEVIEW_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not find config directory")]
    NoConfigDir,
    #[error("Read error ({path}): {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Invalid format ({path}): {message}")]
    InvalidFormat { path: PathBuf, message: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Contents of `config.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub preview_limit: u32,
    pub preview_limits: Vec<u32>,
    pub query_limit: u32,
    pub search_debounce_ms: u64,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            preview_limit: settings.preview_limit,
            preview_limits: settings.preview_limits,
            query_limit: settings.query_limit,
            search_debounce_ms: settings.search_debounce.as_millis() as u64,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `explicit` if given, otherwise `<config_dir>/lakeview/config.toml`.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let path = default_config_path()?;
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Environment first, then the command line, so the flag wins.
    pub fn apply_overrides(&mut self, env_url: Option<String>, cli_url: Option<String>) {
        for url in [env_url, cli_url].into_iter().flatten() {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("base_url must not be empty".to_string()));
        }
        if self.preview_limit == 0 {
            return Err(ConfigError::Invalid(
                "preview_limit must be at least 1".to_string(),
            ));
        }
        if self.preview_limits.contains(&0) {
            return Err(ConfigError::Invalid(
                "preview_limits must all be at least 1".to_string(),
            ));
        }
        if self.query_limit == 0 {
            return Err(ConfigError::Invalid(
                "query_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_settings(&self) -> Settings {
        Settings {
            preview_limit: self.preview_limit,
            preview_limits: self.preview_limits.clone(),
            query_limit: self.query_limit,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(config_base.join("lakeview").join(CONFIG_FILE_NAME))
}
