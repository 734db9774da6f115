//! Projection of the entry log into a short chronological mood series

use crate::domain::{JournalEntry, MoodLevel};

/// Number of most recent entries shown on the trend chart
pub const TREND_WINDOW: usize = 7;

/// Number of leading characters of `displayDate` kept as the point label
pub const LABEL_CHARS: usize = 5;

/// One point of the trend series. `value` is `None` for entries saved
/// without a mood; those are drawn as gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendPoint {
    pub label: String,
    pub value: Option<MoodLevel>,
}

/// Take the newest [`TREND_WINDOW`] entries of a newest-first log and return
/// them oldest-first.
///
/// The label is a plain character truncation of the stored display date, not
/// a calendar-aware month/day extraction.
pub fn project(log: &[JournalEntry]) -> Vec<TrendPoint> {
    log.iter()
        .take(TREND_WINDOW)
        .rev()
        .map(|entry| TrendPoint {
            label: entry.display_date.chars().take(LABEL_CHARS).collect(),
            value: entry.mood,
        })
        .collect()
}

/// Column-oriented series handed to a chart renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<Option<u8>>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

impl From<&[TrendPoint]> for ChartData {
    fn from(points: &[TrendPoint]) -> Self {
        ChartData {
            labels: points.iter().map(|p| p.label.clone()).collect(),
            values: points.iter().map(|p| p.value.map(MoodLevel::value)).collect(),
        }
    }
}
