use crate::session::{Notification, NotificationScope, ProgressSink};
use std::thread;
use std::time::Duration;

/// Sleeps on every dot batch, then forwards to `inner`.
pub struct SlowBatches<S> {
    inner: S,
    delay: Duration,
}

impl<S: ProgressSink> SlowBatches<S> {
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<S: ProgressSink> ProgressSink for SlowBatches<S> {
    fn notify(&mut self, notification: Notification) {
        if notification.scope == NotificationScope::Batch {
            thread::sleep(self.delay);
        }
        self.inner.notify(notification);
    }
}
