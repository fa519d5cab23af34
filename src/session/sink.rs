use crate::session::Notification;
use std::sync::mpsc::Sender;

/// Consumer of progress notifications.
///
/// Delivery is best effort: a sink must never block the sampling loop, and
/// a consumer that has gone away simply stops receiving.
pub trait ProgressSink: Send {
    fn notify(&mut self, notification: Notification);
}

impl ProgressSink for Sender<Notification> {
    fn notify(&mut self, notification: Notification) {
        let _ = self.send(notification);
    }
}
