//! Cancellable debounce task
//!
//! Holds at most one scheduled task at a time. Each call to
//! [`Debouncer::schedule`] deterministically aborts the previously
//! scheduled task before arming a new one, so only the task armed by the
//! final call within a quiet period ever runs.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::AbortHandle;

/// A single-slot scheduler that delays a task by a quiet period
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet_period: Duration,
    pending: Arc<Mutex<Option<AbortHandle>>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    #[must_use]
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `task` to run after the quiet period
    ///
    /// Aborts any previously scheduled task that has not started running.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let quiet_period = self.quiet_period;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            task.await;
        });

        let mut pending = self.pending.lock();
        if let Some(previous) = pending.replace(handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Abort the scheduled task, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().take() {
            handle.abort();
        }
    }
}
