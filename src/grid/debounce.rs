//! Trailing debounce for map idle events.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Quiet period after the last idle event before the grid is recomputed
pub const IDLE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Runs only the last action submitted within a quiet window.
///
/// Every [`Debouncer::call`] aborts the still-pending action and restarts
/// the timer, so a burst of calls produces one run timed from the last call.
/// Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action` to run after the quiet period, replacing any pending one
    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel() {
            debug!("Debounce restarted, previous action dropped");
        }

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Whether an action is waiting for its timer
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Abort the pending action. Returns `true` if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                true
            }
            _ => false,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(IDLE_DEBOUNCE)
    }
}
