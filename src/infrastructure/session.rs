//! Session-scoped handoff values passed between views

use crate::error::Result;
use crate::infrastructure::repository::write_atomic;
use crate::infrastructure::FileSystemRepository;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Key carrying the analyzed text to the detailed view
pub const ANALYSIS_TEXT_KEY: &str = "analysisText";

/// String key/value pairs that live until the session is cleared
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        SessionStore { path }
    }

    pub fn for_repository(repository: &FileSystemRepository) -> Self {
        Self::new(repository.session_path())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read();
        values.insert(key.to_string(), value.to_string());
        write_atomic(&self.path, &serde_json::to_string_pretty(&values)?)?;
        debug!(key, "session value stored");
        Ok(())
    }

    /// Drop every session value
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn read(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "discarding unreadable session state");
            BTreeMap::new()
        })
    }
}
