//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
///
/// `endpoint` overrides the default classifier base URL.
pub fn init(path: &Path, endpoint: Option<&str>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let mut config = Config::new();
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint.to_string();
    }
    repo.save_config(&config)?;

    Ok(config)
}
