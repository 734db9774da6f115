//! Output formatting utilities

use crate::application::DetailedAnalysis;
use crate::domain::{
    mood_symbol, ChartData, ClassificationResult, Highlight, JournalEntry, MoodLevel,
    MoodSelection,
};

/// Shown in place of the entry list when the log is empty
pub const NO_ENTRIES: &str = "No entries yet.";

/// Shown in place of the chart when there is nothing to plot
pub const NO_TREND: &str = "No mood trend yet.";

/// Highest y-axis row of the chart; one row of headroom above the top mood
const CHART_TOP: u8 = MoodLevel::MAX + 1;

/// Width of one chart column
const COLUMN_WIDTH: usize = 7;

/// Format the entry log as cards, newest first
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return NO_ENTRIES.to_string();
    }

    entries
        .iter()
        .map(format_entry_card)
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_entry_card(entry: &JournalEntry) -> String {
    let symbol = mood_symbol(entry.mood);
    let mut card = if symbol.is_empty() {
        format!("{}\n", entry.display_date)
    } else {
        format!("{}  {}\n", entry.display_date, symbol)
    };

    for line in entry.text.lines() {
        card.push_str("  ");
        card.push_str(line);
        card.push('\n');
    }

    card
}

/// Draw the trend series as a text line chart.
///
/// Rows run from the headroom row down to mood 1, ticked with the mood
/// symbols. Points without a mood leave their column blank.
pub fn format_trend_chart(data: &ChartData) -> String {
    if data.is_empty() {
        return NO_TREND.to_string();
    }

    let mut output = String::new();

    for row in (MoodLevel::MIN..=CHART_TOP).rev() {
        let tick = MoodLevel::new(row).map(MoodLevel::symbol).unwrap_or("  ");
        let mut line = format!(" {} │", tick);
        for value in &data.values {
            if *value == Some(row) {
                line.push_str(&format!("{:^width$}", "●", width = COLUMN_WIDTH));
            } else {
                line.push_str(&" ".repeat(COLUMN_WIDTH));
            }
        }
        output.push_str(line.trim_end());
        output.push('\n');
    }

    output.push_str("    └");
    output.push_str(&"─".repeat(COLUMN_WIDTH * data.len()));
    output.push('\n');

    let labels: String = data
        .labels
        .iter()
        .map(|label| format!("{:^width$}", label, width = COLUMN_WIDTH))
        .collect();
    output.push_str("     ");
    output.push_str(labels.trim_end());
    output.push('\n');

    output
}

/// One-line mood picker showing which choice is active
pub fn format_selection(
    selection: &MoodSelection,
    highlights: &[(MoodLevel, Highlight)],
) -> String {
    let choices: Vec<String> = highlights
        .iter()
        .map(|(level, highlight)| match highlight {
            Highlight::Active => format!("[{} {}]", level, level.symbol()),
            Highlight::Neutral => format!("{} {}", level, level.symbol()),
            Highlight::Dimmed => format!("{} ·", level),
        })
        .collect();

    let mut line = format!("moods: {}", choices.join("  "));
    if !selection.label().is_empty() {
        line.push_str("  ");
        line.push_str(selection.label());
    }
    line
}

/// Result section of the analyze view
pub fn format_result(result: &ClassificationResult) -> String {
    format!("Mood: {}\n{}", result.mood_label, result.description())
}

/// The detailed analysis view
pub fn format_details(details: &DetailedAnalysis) -> String {
    let mut output = format!("Text: {}\n", details.text.trim());
    output.push_str(&format_result(&details.result));
    output.push('\n');

    if let Some(confidence) = &details.result.confidence {
        output.push_str(&format!("Confidence: {}\n", confidence));
    }
    if !details.result.highlighted_phrases.is_empty() {
        output.push_str(&format!(
            "Highlighted: {}\n",
            details.result.highlighted_phrases.join(", ")
        ));
    }

    output
}
