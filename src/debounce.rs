//! Coalescing timers for the edit pipeline.
//!
//! Every buffer mutation cancels the pending pass and schedules a new one
//! after a quiet interval, so a burst of keystrokes produces exactly one
//! assembly/render (or persistence) pass — the one scheduled by the last
//! mutation.

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;

use tokio::task::AbortHandle;

/// Preview regeneration quiet interval.
pub const PREVIEW_DEBOUNCE: Duration = Duration::from_millis(250);
/// Persistence quiet interval.
pub const PERSIST_DEBOUNCE: Duration = Duration::from_millis(1000);

/// An owned, cancellable scheduled-task slot. The pending handle is
/// replaced (and the old task aborted) on every `schedule`, and aborted
/// on `cancel` or drop so a torn-down session never acts on stale state.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<AbortHandle>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `task` after the quiet interval, cancelling any previously
    /// scheduled run. Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
        if let Some(previous) = self.swap(Some(handle.abort_handle())) {
            previous.abort();
        }
    }

    /// Cancel the pending run, if any, without scheduling a new one.
    pub fn cancel(&self) {
        if let Some(pending) = self.swap(None) {
            pending.abort();
        }
    }

    fn swap(&self, next: Option<AbortHandle>) -> Option<AbortHandle> {
        let mut slot = match self.pending.lock() {
            Ok(slot) => slot,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *slot, next)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
