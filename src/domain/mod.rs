//! Domain layer - Business logic and domain models

pub mod classification;
pub mod entry;
pub mod selection;
pub mod trend;

pub use classification::{
    describe, ClassificationResult, ClassifyState, MoodCategory, TriggerControl,
};
pub use entry::{mood_symbol, JournalEntry, MoodLevel, ValidationError, DEFAULT_DATE_FORMAT};
pub use selection::{Highlight, MoodSelection, MoodSelector};
pub use trend::{project, ChartData, TrendPoint, TREND_WINDOW};
