use std::future::Future;
use std::time::Duration;
use tokio::task::AbortHandle;

/// Defers an action until input has been quiet for a fixed interval.
///
/// Scheduling replaces any pending action, so at most one task is ever
/// waiting to fire. An action that has already started running is not
/// interrupted.
pub struct Debouncer {
    quiet_period: Duration,
    pending: Option<AbortHandle>,
}

impl Debouncer {
    pub fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
        }
    }

    /// Schedule `action` to run after the quiet period, cancelling any
    /// previously scheduled action.
    pub fn schedule<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let quiet_period = self.quiet_period;
        let task = tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            action.await;
        });
        self.pending = Some(task.abort_handle());
    }

    /// Cancel the pending action, if any.
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
