//! Error types for sentra

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sentra application
#[derive(Debug, Error)]
pub enum SentraError {
    #[error("Not a sentra directory: {0}")]
    NotSentraDirectory(PathBuf),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Classification request failed: {0}")]
    Transport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SentraError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SentraError::NotSentraDirectory(_) => 2,
            SentraError::Validation(_) | SentraError::InvalidMood(_) => 3,
            SentraError::Transport(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SentraError::NotSentraDirectory(path) => {
                format!(
                    "Not a sentra directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'sentra init' in this directory to create a new journal\n\
                    • Navigate to an existing sentra directory\n\
                    • Set SENTRA_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            SentraError::Validation(err) => {
                format!(
                    "{}\n\n\
                    Examples:\n\
                    sentra write \"Long walk by the river\"\n\
                    sentra write --mood 4\n\
                    sentra write \"Tired but fine\" --mood 3",
                    err
                )
            }
            SentraError::InvalidMood(value) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods:\n\
                    • 5 Great, 4 Good, 3 Okay, 2 Low, 1 Rough\n\
                    Example: sentra write --mood 4",
                    value
                )
            }
            SentraError::Transport(msg) => {
                format!(
                    "Classification request failed: {}\n\n\
                    Suggestions:\n\
                    • Check that the classifier service is running\n\
                    • Set SENTRA_ENDPOINT or run 'sentra config endpoint <url>'",
                    msg
                )
            }
            SentraError::Config(msg) => {
                if msg.contains("date format") {
                    format!(
                        "{}\n\n\
                        Expected a strftime pattern such as %m/%d/%Y or %d.%m.%Y\n\
                        Example: sentra config date_format '%d/%m/%Y'",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SentraError
pub type Result<T> = std::result::Result<T, SentraError>;
