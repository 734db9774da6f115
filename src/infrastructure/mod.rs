//! Infrastructure layer - External I/O and persistence

pub mod classifier;
pub mod config;
pub mod repository;
pub mod scheduler;
pub mod session;
pub mod store;

pub use classifier::{Classifier, HttpClassifier};
pub use config::Config;
pub use repository::{FileSystemRepository, JournalRepository};
pub use scheduler::{ManualScheduler, SavedIndicator, Scheduler, TokioScheduler};
pub use session::{SessionStore, ANALYSIS_TEXT_KEY};
pub use store::{EntryStore, FileEntryStore, MemoryEntryStore, JOURNAL_KEY};
