use crate::session::{Notification, ProgressSink};
use std::sync::{Arc, Mutex};

/// Keeps every notification it receives; read them back through the handle.
pub struct RecordingSink {
    seen: Arc<Mutex<Vec<Notification>>>,
}

#[derive(Clone)]
pub struct RecordingHandle {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingSink {
    pub fn new() -> (Self, RecordingHandle) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                seen: Arc::clone(&seen),
            },
            RecordingHandle { seen },
        )
    }
}

impl ProgressSink for RecordingSink {
    fn notify(&mut self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

impl RecordingHandle {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }
}
