use crate::{
    api::DEFAULT_CHAT_URL,
    errors::{ChatError, ChatResult},
};
use reqwest::Url;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_URL.to_string(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    /// Command line and environment win over the file.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        self
    }

    /// Where log files go: the configured directory, or `~/.config/minichat/logs`.
    pub fn resolved_log_dir(&self) -> ChatResult<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(config_dir()?.join("logs")),
        }
    }
}

/// Loads the config file at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> ChatResult<Config> {
    if !path.exists() {
        log::debug!("No config file at {}; using defaults", path.display());
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)
        .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

    // Validated by the caller once overrides are applied
    Ok(config)
}

pub fn default_config_path() -> ChatResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

fn config_dir() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("minichat"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = Url::parse(&config.endpoint).map_err(|e| {
        ChatError::config_error(format!("Invalid endpoint {:?}: {}", config.endpoint, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ChatError::config_error(format!(
            "Endpoint must use http or https, got {:?}",
            url.scheme()
        )));
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ChatError::config_error(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}
