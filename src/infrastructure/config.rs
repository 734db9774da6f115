//! Configuration management

use crate::domain::DEFAULT_DATE_FORMAT;
use crate::error::{Result, SentraError};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Classifier base URL used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Directory marking a journal root
pub const STATE_DIR: &str = ".sentra";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    pub created: DateTime<Utc>,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            date_format: default_date_format(),
            request_timeout_secs: None,
            created: Utc::now(),
        }
    }

    /// Load config from .sentra/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(STATE_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SentraError::NotSentraDirectory(path.to_path_buf())
            } else {
                SentraError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SentraError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .sentra/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let state_dir = path.join(STATE_DIR);
        let config_path = state_dir.join("config.toml");

        if !state_dir.exists() {
            fs::create_dir(&state_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SentraError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the classifier endpoint, checking SENTRA_ENDPOINT first
    pub fn get_endpoint(&self) -> String {
        std::env::var("SENTRA_ENDPOINT").unwrap_or_else(|_| self.endpoint.clone())
    }

    /// Set the display date format after checking it is a valid strftime pattern
    pub fn set_date_format(&mut self, format: &str) -> Result<()> {
        if !is_valid_date_format(format) {
            return Err(SentraError::Config(format!(
                "Invalid date format: '{}'",
                format
            )));
        }
        self.date_format = format.to_string();
        Ok(())
    }
}

/// Whether `format` parses as a non-empty chrono strftime pattern
pub fn is_valid_date_format(format: &str) -> bool {
    !format.trim().is_empty() && StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
