use crate::session::{CancellationToken, Notification, NotificationScope, ProgressSink};

/// Requests cancellation once `runs` runs have been reported.
pub struct CancelAfterRuns {
    token: CancellationToken,
    runs: usize,
    seen: usize,
}

impl CancelAfterRuns {
    pub fn new(token: CancellationToken, runs: usize) -> Self {
        Self {
            token,
            runs,
            seen: 0,
        }
    }
}

impl ProgressSink for CancelAfterRuns {
    fn notify(&mut self, notification: Notification) {
        if notification.scope == NotificationScope::Run {
            self.seen += 1;
            if self.seen >= self.runs {
                self.token.cancel();
            }
        }
    }
}

/// Requests cancellation on the first dot batch of run `run_index`.
pub struct CancelOnBatch {
    token: CancellationToken,
    run_index: usize,
}

impl CancelOnBatch {
    pub fn new(token: CancellationToken, run_index: usize) -> Self {
        Self { token, run_index }
    }
}

impl ProgressSink for CancelOnBatch {
    fn notify(&mut self, notification: Notification) {
        if notification.scope == NotificationScope::Batch && notification.run_index == self.run_index
        {
            self.token.cancel();
        }
    }
}
