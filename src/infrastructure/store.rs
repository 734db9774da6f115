//! Entry store backed by the `sentra_journal` key

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::repository::write_atomic;
use crate::infrastructure::FileSystemRepository;
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the persistence key holding the entry log
pub const JOURNAL_KEY: &str = "sentra_journal";

/// Durable, append-only, newest-first log of journal entries
pub trait EntryStore {
    /// Prepend `entry` to the stored log.
    ///
    /// A missing or unreadable log is replaced by a log holding only
    /// `entry`. Only a failure to write the new log is returned.
    fn append(&self, entry: JournalEntry) -> Result<()>;

    /// All entries, newest first; empty when nothing readable is stored
    fn read_all(&self) -> Vec<JournalEntry>;
}

/// Decode a stored log. `None` means the data is corrupt.
///
/// A JSON `null` is treated as an empty log.
pub fn decode_log(raw: &str) -> Option<Vec<JournalEntry>> {
    serde_json::from_str::<Option<Vec<JournalEntry>>>(raw)
        .map(Option::unwrap_or_default)
        .ok()
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct FileEntryStore {
    path: PathBuf,
}

impl FileEntryStore {
    pub fn new(path: PathBuf) -> Self {
        FileEntryStore { path }
    }

    pub fn for_repository(repository: &FileSystemRepository) -> Self {
        Self::new(repository.journal_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntryStore for FileEntryStore {
    fn append(&self, entry: JournalEntry) -> Result<()> {
        let mut log = self.read_all();
        let id = entry.id;
        log.insert(0, entry);

        let encoded = serde_json::to_string(&log)?;
        write_atomic(&self.path, &encoded)?;

        debug!(key = JOURNAL_KEY, id, entries = log.len(), "appended entry");
        Ok(())
    }

    fn read_all(&self) -> Vec<JournalEntry> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(key = JOURNAL_KEY, "no stored entries yet");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = JOURNAL_KEY, error = %e, "unreadable entry log, treating as empty");
                return Vec::new();
            }
        };

        decode_log(&raw).unwrap_or_else(|| {
            warn!(key = JOURNAL_KEY, "corrupt entry log, treating as empty");
            Vec::new()
        })
    }
}

/// Process-local store, used where nothing should touch the disk
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    entries: RefCell<Vec<JournalEntry>>,
    appends: Cell<usize>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing newest-first log
    pub fn with_entries(entries: Vec<JournalEntry>) -> Self {
        MemoryEntryStore {
            entries: RefCell::new(entries),
            appends: Cell::new(0),
        }
    }

    /// Number of successful `append` calls
    pub fn append_count(&self) -> usize {
        self.appends.get()
    }
}

impl EntryStore for MemoryEntryStore {
    fn append(&self, entry: JournalEntry) -> Result<()> {
        self.entries.borrow_mut().insert(0, entry);
        self.appends.set(self.appends.get() + 1);
        Ok(())
    }

    fn read_all(&self) -> Vec<JournalEntry> {
        self.entries.borrow().clone()
    }
}
