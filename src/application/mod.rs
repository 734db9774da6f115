//! Application layer - Use cases and orchestration

pub mod analyze;
pub mod init;
pub mod journal;
pub mod manage_config;

pub use analyze::{load_details, AnalysisController, AnalysisOutcome, AnalysisView, DetailedAnalysis};
pub use journal::{ChartHandle, JournalController, JournalEvent, JournalView};
pub use manage_config::ConfigService;
