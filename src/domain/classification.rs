//! Mood classification results and the analyze trigger state

use serde::Deserialize;
use std::fmt;

/// Label of the analyze control while idle
pub const IDLE_LABEL: &str = "Analyze";
/// Label of the analyze control while a request is in flight
pub const BUSY_LABEL: &str = "Analyzing...";
/// The one notice shown when classification fails
pub const FAILURE_NOTICE: &str = "Something went wrong. Please try again.";
/// Description for labels outside the known category set
pub const FALLBACK_DESCRIPTION: &str = "Analysis complete.";

/// Categories the classifier is known to return
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoodCategory {
    Depression,
    Anxiety,
    Suicidal,
    Normal,
    Stress,
    Bipolar,
    PersonalityDisorder,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 7] = [
        MoodCategory::Depression,
        MoodCategory::Anxiety,
        MoodCategory::Suicidal,
        MoodCategory::Normal,
        MoodCategory::Stress,
        MoodCategory::Bipolar,
        MoodCategory::PersonalityDisorder,
    ];

    /// Name as sent by the classifier
    pub fn name(self) -> &'static str {
        match self {
            MoodCategory::Depression => "Depression",
            MoodCategory::Anxiety => "Anxiety",
            MoodCategory::Suicidal => "Suicidal",
            MoodCategory::Normal => "Normal",
            MoodCategory::Stress => "Stress",
            MoodCategory::Bipolar => "Bipolar",
            MoodCategory::PersonalityDisorder => "Personality Disorder",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MoodCategory::Depression => {
                "Your text reflects heavy emotions. It's okay to feel this way."
            }
            MoodCategory::Anxiety => "There seems to be some worry or tension in your words.",
            MoodCategory::Suicidal => "We hear deep pain here. Please remember you are not alone.",
            MoodCategory::Normal => "Your text appears to be balanced.",
            MoodCategory::Stress => "It sounds like things might be overwhelming right now.",
            MoodCategory::Bipolar => "Your text shows intense emotional variation.",
            MoodCategory::PersonalityDisorder => "We detect complex emotional patterns.",
        }
    }

    /// Exact-match lookup of a classifier label
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == label)
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Description for any label, known or not
pub fn describe(label: &str) -> &'static str {
    MoodCategory::from_label(label)
        .map(MoodCategory::description)
        .unwrap_or(FALLBACK_DESCRIPTION)
}

/// Body of a successful `/predict` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassificationResult {
    #[serde(rename = "mood")]
    pub mood_label: String,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub highlighted_phrases: Vec<String>,
}

impl ClassificationResult {
    pub fn new(mood_label: impl Into<String>) -> Self {
        ClassificationResult {
            mood_label: mood_label.into(),
            confidence: None,
            highlighted_phrases: Vec::new(),
        }
    }

    pub fn category(&self) -> Option<MoodCategory> {
        MoodCategory::from_label(&self.mood_label)
    }

    pub fn description(&self) -> &'static str {
        describe(&self.mood_label)
    }
}

/// Lifecycle of a single classification request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifyState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// The control that starts a classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerControl {
    enabled: bool,
    label: String,
}

impl Default for TriggerControl {
    fn default() -> Self {
        TriggerControl {
            enabled: true,
            label: IDLE_LABEL.to_string(),
        }
    }
}

impl TriggerControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Disable the control and show the busy label
    pub fn begin_busy(&mut self) {
        self.enabled = false;
        self.label = BUSY_LABEL.to_string();
    }

    /// Re-enable the control with its original label
    pub fn restore(&mut self) {
        *self = TriggerControl::default();
    }
}
