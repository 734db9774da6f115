//! Delayed dismissal of the transient "saved" indicator

use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Visibility of the "saved" indicator.
///
/// Clones share the same flag, so a scheduled dismissal clears whatever the
/// view is showing. Dismissing twice is harmless.
#[derive(Debug, Clone, Default)]
pub struct SavedIndicator {
    visible: Arc<AtomicBool>,
}

impl SavedIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) {
        self.visible.store(true, Ordering::SeqCst);
    }

    pub fn dismiss(&self) {
        self.visible.store(false, Ordering::SeqCst);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

/// Runs fire-and-forget dismissals. Scheduled dismissals are never cancelled.
pub trait Scheduler {
    fn schedule_dismiss(&self, indicator: SavedIndicator, delay: Duration);
}

/// Spawns each dismissal onto the current tokio runtime.
///
/// A pending dismissal is dropped with the runtime, so a one-shot command
/// that exits right after saving never runs it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule_dismiss(&self, indicator: SavedIndicator, delay: Duration) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    indicator.dismiss();
                    debug!("saved indicator dismissed");
                });
            }
            Err(_) => {
                debug!("no async runtime; dismissing saved indicator immediately");
                indicator.dismiss();
            }
        }
    }
}

/// Holds dismissals until [`ManualScheduler::fire_all`] is called
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<(SavedIndicator, Duration)>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays of the dismissals not yet fired
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(_, d)| *d).collect()
    }

    /// Run every pending dismissal, returning how many ran
    pub fn fire_all(&self) -> usize {
        let pending: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        for (indicator, _) in &pending {
            indicator.dismiss();
        }
        pending.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_dismiss(&self, indicator: SavedIndicator, delay: Duration) {
        self.pending.borrow_mut().push((indicator, delay));
    }
}
