//! Mood selection held between picking a mood and saving an entry

use crate::domain::MoodLevel;

/// The currently chosen mood, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MoodSelection {
    #[default]
    None,
    Selected {
        level: MoodLevel,
        label: String,
    },
}

impl MoodSelection {
    pub fn level(&self) -> Option<MoodLevel> {
        match self {
            MoodSelection::None => None,
            MoodSelection::Selected { level, .. } => Some(*level),
        }
    }

    /// Label shown beside the mood picker; empty when nothing is selected
    pub fn label(&self) -> &str {
        match self {
            MoodSelection::None => "",
            MoodSelection::Selected { label, .. } => label,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, MoodSelection::None)
    }
}

/// How a mood choice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// The selected choice
    Active,
    /// Another choice is selected
    Dimmed,
    /// Nothing is selected
    Neutral,
}

/// Single-select mood picker state
#[derive(Debug, Default)]
pub struct MoodSelector {
    current: MoodSelection,
}

impl MoodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `level`, replacing any previous selection
    pub fn select(&mut self, level: MoodLevel, label: impl Into<String>) {
        self.current = MoodSelection::Selected {
            level,
            label: label.into(),
        };
    }

    pub fn reset(&mut self) {
        self.current = MoodSelection::None;
    }

    pub fn current(&self) -> &MoodSelection {
        &self.current
    }

    /// Presentation state of every level, lowest first
    pub fn highlight_states(&self) -> Vec<(MoodLevel, Highlight)> {
        let active = self.current.level();
        MoodLevel::all()
            .map(|level| {
                let highlight = match active {
                    None => Highlight::Neutral,
                    Some(selected) if selected == level => Highlight::Active,
                    Some(_) => Highlight::Dimmed,
                };
                (level, highlight)
            })
            .collect()
    }
}
