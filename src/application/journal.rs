//! Journal use case: pick a mood, save an entry, re-render list and chart

use crate::domain::{
    project, ChartData, Highlight, JournalEntry, MoodLevel, MoodSelection, MoodSelector,
};
use crate::error::{Result, SentraError};
use crate::infrastructure::{EntryStore, SavedIndicator, Scheduler};
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::debug;

/// How long the "saved" indicator stays up after a save
pub const SAVED_INDICATOR_DURATION: Duration = Duration::from_secs(2);

/// Identifies a chart drawn by a [`JournalView`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// Presentation collaborator of the journal controller
pub trait JournalView {
    /// Reflect the current mood pick and how each choice is highlighted
    fn show_selection(&mut self, selection: &MoodSelection, highlights: &[(MoodLevel, Highlight)]);

    /// Empty the text input after a save
    fn clear_input(&mut self);

    /// Show the transient "saved" indicator
    fn show_saved(&mut self, indicator: &SavedIndicator);

    /// Blocking prompt for a user-correctable problem
    fn prompt(&mut self, message: &str);

    /// Render the full entry log, newest first
    fn show_entries(&mut self, entries: &[JournalEntry]);

    /// Build a chart for `data` and return its handle
    fn draw_chart(&mut self, data: &ChartData) -> ChartHandle;

    /// Release a chart built by `draw_chart`
    fn discard_chart(&mut self, chart: ChartHandle);
}

/// Events the journal view can raise
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEvent {
    PickMood(MoodLevel),
    Save(String),
    Render,
}

/// Owns the mood selection, the saved indicator and the current chart
pub struct JournalController<S, V, D> {
    store: S,
    view: V,
    scheduler: D,
    date_format: String,
    selector: MoodSelector,
    indicator: SavedIndicator,
    chart: Option<ChartHandle>,
}

impl<S, V, D> JournalController<S, V, D>
where
    S: EntryStore,
    V: JournalView,
    D: Scheduler,
{
    pub fn new(store: S, view: V, scheduler: D, date_format: impl Into<String>) -> Self {
        JournalController {
            store,
            view,
            scheduler,
            date_format: date_format.into(),
            selector: MoodSelector::new(),
            indicator: SavedIndicator::new(),
            chart: None,
        }
    }

    /// Initial load: clear any selection and draw list and chart
    pub fn start(&mut self) {
        self.selector.reset();
        self.render();
    }

    /// Dispatch a view event. Validation failures go to the view as a
    /// prompt; only storage failures are returned.
    ///
    /// `Render` re-shows the saved indicator until its dismissal has run.
    pub fn handle(&mut self, event: JournalEvent) -> Result<()> {
        match event {
            JournalEvent::PickMood(level) => {
                self.pick_mood(level);
                Ok(())
            }
            JournalEvent::Save(text) => match self.save(&text) {
                Ok(_) => Ok(()),
                Err(SentraError::Validation(err)) => {
                    self.view.prompt(&err.to_string());
                    Ok(())
                }
                Err(err) => Err(err),
            },
            JournalEvent::Render => {
                self.render();
                if self.indicator.is_visible() {
                    self.view.show_saved(&self.indicator);
                }
                Ok(())
            }
        }
    }

    pub fn pick_mood(&mut self, level: MoodLevel) {
        self.selector.select(level, level.label());
        self.show_selection();
    }

    /// Save `text` with the current mood selection
    pub fn save(&mut self, text: &str) -> Result<JournalEntry> {
        self.save_at(text, Utc::now())
    }

    /// Save with an explicit creation time.
    ///
    /// Nothing is written when validation fails. After the append the
    /// selection is reset, the input cleared, the saved indicator shown with
    /// its dismissal scheduled, and list and chart re-rendered before
    /// returning.
    pub fn save_at(&mut self, text: &str, created_at: DateTime<Utc>) -> Result<JournalEntry> {
        let newest_id = self.store.read_all().first().map(|entry| entry.id);
        let entry = JournalEntry::create(
            text,
            self.selector.current().level(),
            created_at,
            &self.date_format,
            newest_id,
        )?;

        self.store.append(entry.clone())?;
        debug!(id = entry.id, mood = ?entry.mood, "entry saved");

        self.selector.reset();
        self.show_selection();
        self.view.clear_input();

        self.indicator.show();
        self.view.show_saved(&self.indicator);
        self.scheduler
            .schedule_dismiss(self.indicator.clone(), SAVED_INDICATOR_DURATION);

        self.render();
        Ok(entry)
    }

    /// Redraw the entry list and replace the trend chart
    pub fn render(&mut self) {
        let log = self.store.read_all();
        self.view.show_entries(&log);

        let data = ChartData::from(project(&log).as_slice());
        if let Some(previous) = self.chart.take() {
            self.view.discard_chart(previous);
        }
        self.chart = Some(self.view.draw_chart(&data));
    }

    fn show_selection(&mut self) {
        let highlights = self.selector.highlight_states();
        self.view.show_selection(self.selector.current(), &highlights);
    }

    pub fn selection(&self) -> &MoodSelection {
        self.selector.current()
    }

    pub fn indicator(&self) -> &SavedIndicator {
        &self.indicator
    }

    pub fn chart(&self) -> Option<ChartHandle> {
        self.chart
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &D {
        &self.scheduler
    }
}
