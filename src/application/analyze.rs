//! Analyze use case: classify free text and present the mood label
//!
//! A request moves the controller `Idle -> Submitting -> Success | Failed`
//! and always ends back in `Idle`, with the trigger re-enabled.

use crate::domain::classification::FAILURE_NOTICE;
use crate::domain::{ClassificationResult, ClassifyState, TriggerControl};
use crate::error::Result;
use crate::infrastructure::{Classifier, SessionStore, ANALYSIS_TEXT_KEY};
use tracing::{debug, warn};

/// Presentation collaborator of the analysis controller
pub trait AnalysisView {
    /// Reflect the trigger's enabled state and label
    fn show_trigger(&mut self, trigger: &TriggerControl);

    /// Reveal the result section
    fn show_result(&mut self, result: &ClassificationResult);

    /// Hide the result section
    fn hide_result(&mut self);

    /// Non-blocking notice
    fn notify(&mut self, message: &str);
}

/// What a call to [`AnalysisController::classify`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    /// Blank input, or a request already in flight
    Skipped,
    Classified(ClassificationResult),
    Failed,
}

pub struct AnalysisController<C, V> {
    classifier: C,
    view: V,
    state: ClassifyState,
    trigger: TriggerControl,
    result: Option<ClassificationResult>,
}

impl<C, V> AnalysisController<C, V>
where
    C: Classifier,
    V: AnalysisView,
{
    pub fn new(classifier: C, view: V) -> Self {
        AnalysisController {
            classifier,
            view,
            state: ClassifyState::Idle,
            trigger: TriggerControl::default(),
            result: None,
        }
    }

    /// Classify `text`. Blank text is a no-op, not an error.
    ///
    /// Failures are shown once through [`AnalysisView::notify`] and never
    /// retried.
    pub async fn classify(&mut self, text: &str) -> AnalysisOutcome {
        let text = text.trim();
        if text.is_empty() || !self.trigger.is_enabled() {
            return AnalysisOutcome::Skipped;
        }

        self.transition(ClassifyState::Submitting);
        self.trigger.begin_busy();
        self.view.show_trigger(&self.trigger);

        let outcome = match self.classifier.classify(text).await {
            Ok(result) => {
                self.transition(ClassifyState::Success);
                self.trigger.restore();
                self.view.show_trigger(&self.trigger);
                self.view.show_result(&result);
                self.result = Some(result.clone());
                AnalysisOutcome::Classified(result)
            }
            Err(err) => {
                warn!(error = %err, "classification failed");
                self.transition(ClassifyState::Failed);
                self.view.notify(FAILURE_NOTICE);
                self.trigger.restore();
                self.view.show_trigger(&self.trigger);
                AnalysisOutcome::Failed
            }
        };

        self.transition(ClassifyState::Idle);
        outcome
    }

    /// Hand `input` to the detailed view. Only possible while a result is
    /// shown; returns whether the handoff was written.
    pub fn follow_details_link(&self, input: &str, session: &SessionStore) -> Result<bool> {
        if self.result.is_none() {
            return Ok(false);
        }
        session.set(ANALYSIS_TEXT_KEY, input)?;
        Ok(true)
    }

    /// Drop the shown result
    pub fn clear(&mut self) {
        self.result = None;
        self.view.hide_result();
    }

    fn transition(&mut self, next: ClassifyState) {
        debug!(from = ?self.state, to = ?next, "analysis state");
        self.state = next;
    }

    pub fn state(&self) -> ClassifyState {
        self.state
    }

    pub fn trigger(&self) -> &TriggerControl {
        &self.trigger
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Text and result shown by the detailed view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailedAnalysis {
    pub text: String,
    pub result: ClassificationResult,
}

/// Load the detailed view from the session handoff.
///
/// Returns `Ok(None)` when no text was handed off.
pub async fn load_details<C: Classifier>(
    classifier: &C,
    session: &SessionStore,
) -> Result<Option<DetailedAnalysis>> {
    let Some(text) = session.get(ANALYSIS_TEXT_KEY) else {
        return Ok(None);
    };
    if text.trim().is_empty() {
        return Ok(None);
    }

    let result = classifier.classify(text.trim()).await?;
    Ok(Some(DetailedAnalysis { text, result }))
}
