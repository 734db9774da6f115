//! Terminal rendering of the journal and analysis views

use crate::application::{load_details, AnalysisView, ChartHandle, JournalView};
use crate::cli::output::{
    format_details, format_entry_list, format_result, format_selection, format_trend_chart,
};
use crate::domain::classification::FAILURE_NOTICE;
use crate::domain::{
    ChartData, ClassificationResult, Highlight, JournalEntry, MoodLevel, MoodSelection,
    TriggerControl,
};
use crate::error::{Result, SentraError};
use crate::infrastructure::{Classifier, SavedIndicator, SessionStore};
use tracing::debug;

/// Text of the saved indicator
pub const SAVED_MESSAGE: &str = "Saved ✓";

/// Writes views to stdout, notices and prompts to stderr
#[derive(Debug, Default)]
pub struct TerminalView {
    interactive: bool,
    charts_drawn: u64,
}

impl TerminalView {
    /// View for one-shot commands
    pub fn new() -> Self {
        Self::default()
    }

    /// View for the shell, which also echoes the mood picker
    pub fn interactive() -> Self {
        TerminalView {
            interactive: true,
            charts_drawn: 0,
        }
    }
}

impl JournalView for TerminalView {
    fn show_selection(&mut self, selection: &MoodSelection, highlights: &[(MoodLevel, Highlight)]) {
        if self.interactive {
            println!("{}", format_selection(selection, highlights));
        }
    }

    fn clear_input(&mut self) {
        debug!("input cleared");
    }

    fn show_saved(&mut self, indicator: &SavedIndicator) {
        if indicator.is_visible() {
            println!("{}", SAVED_MESSAGE);
        }
    }

    fn prompt(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn show_entries(&mut self, entries: &[JournalEntry]) {
        println!("{}", format_entry_list(entries));
    }

    fn draw_chart(&mut self, data: &ChartData) -> ChartHandle {
        print!("{}", format_trend_chart(data));
        if data.is_empty() {
            println!();
        }
        self.charts_drawn += 1;
        ChartHandle(self.charts_drawn)
    }

    fn discard_chart(&mut self, chart: ChartHandle) {
        debug!(chart = chart.0, "chart discarded");
    }
}

impl AnalysisView for TerminalView {
    fn show_trigger(&mut self, trigger: &TriggerControl) {
        if !trigger.is_enabled() {
            eprintln!("{}", trigger.label());
        }
    }

    fn show_result(&mut self, result: &ClassificationResult) {
        println!("{}", format_result(result));
    }

    fn hide_result(&mut self) {
        debug!("result hidden");
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Run the detailed view and return the exit code
pub async fn show_details<C: Classifier>(classifier: &C, session: &SessionStore) -> Result<i32> {
    match load_details(classifier, session).await {
        Ok(Some(details)) => {
            print!("{}", format_details(&details));
            Ok(0)
        }
        Ok(None) => {
            eprintln!("Nothing to show. Run 'sentra analyze <text> --details' first.");
            Ok(0)
        }
        Err(SentraError::Transport(_)) => {
            eprintln!("{}", FAILURE_NOTICE);
            Ok(4)
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_handles_are_distinct() {
        let mut view = TerminalView::new();
        let first = view.draw_chart(&ChartData::default());
        let second = view.draw_chart(&ChartData::default());
        assert_ne!(first, second);
    }
}
