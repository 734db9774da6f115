//! Config management use case

use crate::error::{Result, SentraError};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Keys accepted by `sentra config`
pub const CONFIG_KEYS: &str = "endpoint, date_format, request_timeout_secs, created";

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "endpoint" => Ok(config.endpoint.clone()),
            "date_format" => Ok(config.date_format.clone()),
            "request_timeout_secs" => Ok(config
                .request_timeout_secs
                .map(|secs| secs.to_string())
                .unwrap_or_else(|| "none".to_string())),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SentraError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, CONFIG_KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "endpoint" => {
                if value.trim().is_empty() {
                    return Err(SentraError::Config("Endpoint cannot be empty".to_string()));
                }
                config.endpoint = value.trim().to_string();
            }
            "date_format" => config.set_date_format(value)?,
            "request_timeout_secs" => {
                config.request_timeout_secs = match value.trim() {
                    "" | "none" => None,
                    secs => Some(secs.parse().map_err(|_| {
                        SentraError::Config(format!(
                            "Invalid request_timeout_secs: '{}' (expected whole seconds or 'none')",
                            value
                        ))
                    })?),
                };
            }
            "created" => {
                return Err(SentraError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SentraError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: endpoint, date_format, request_timeout_secs",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
