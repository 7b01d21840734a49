use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Trailing-edge debouncer for bursty triggers such as search input: each
/// call cancels the previously scheduled action and schedules its own after
/// the configured delay. Dropping the debouncer cancels the pending action.
#[derive(Debug)]
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

    /// Schedules `action` to run after the delay, cancelling any action
    /// scheduled by a previous call that has not fired yet.
    pub fn call<F>(&mut self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            action();
        }));
    }

    /// Cancels the pending action, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
