//! Journal root discovery and the `.sentra/` layout

use crate::error::{Result, SentraError};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for journal operations
pub trait JournalRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .sentra/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .sentra/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .sentra directory exists
    fn is_initialized(&self) -> bool;

    /// Create .sentra directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks SENTRA_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("SENTRA_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(SentraError::Config(format!(
                    "SENTRA_ROOT is set to '{}' but no .sentra directory found. \
                    Run 'sentra init' in that directory or unset SENTRA_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(SentraError::NotSentraDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    /// The `.sentra` directory of this journal
    pub fn state_dir(&self) -> PathBuf {
        self.root.join(STATE_DIR)
    }

    /// File backing the `sentra_journal` key
    pub fn journal_path(&self) -> PathBuf {
        self.state_dir().join("sentra_journal.json")
    }

    /// File backing the session-scoped handoff keys
    pub fn session_path(&self) -> PathBuf {
        self.state_dir().join("session.json")
    }
}

impl JournalRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.state_dir();

        if state_dir.exists() {
            return Err(SentraError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }
}

/// Replace `path` with `content` by writing a sibling temp file and renaming
/// it into place, so readers see either the old or the new content. The
/// temp file is removed again when the rename fails.
///
/// On Windows, `rename` does not overwrite existing files, so the destination
/// is removed first.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.sentra-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("state.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    if let Err(e) = replace_with(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

fn replace_with(tmp_path: &Path, path: &Path) -> std::io::Result<()> {
    #[cfg(windows)]
    {
        if path.exists() {
            fs::remove_file(path)?;
        }
    }

    fs::rename(tmp_path, path)
}
