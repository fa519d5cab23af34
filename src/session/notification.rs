use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    SharePiValue,
}

/// What a notification summarises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationScope {
    /// A dot batch inside a run.
    Batch,
    /// A completed run.
    Run,
    /// The session aggregate.
    Session,
}

/// Advisory progress message sent from the orchestrator to presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Text-formatted estimate.
    pub value: String,
    pub is_final: bool,
    pub scope: NotificationScope,
    /// Zero-based index of the run this refers to.
    pub run_index: usize,
    /// Cumulative inside-count of the run; 0 for the session aggregate.
    pub in_circle: u64,
    /// Dots behind `in_circle`; 0 for the session aggregate.
    pub dots: usize,
    pub estimate: f64,
}

impl Notification {
    pub fn batch(run_index: usize, dots: usize, in_circle: u64, estimate: f64) -> Self {
        Self::share(NotificationScope::Batch, run_index, dots, in_circle, estimate)
    }

    pub fn run(run_index: usize, dots: usize, in_circle: u64, estimate: f64) -> Self {
        Self::share(NotificationScope::Run, run_index, dots, in_circle, estimate)
    }

    /// Final message carrying the session mean after `runs` completed runs.
    pub fn session(runs: usize, pi_mean: f64) -> Self {
        Self::share(
            NotificationScope::Session,
            runs.saturating_sub(1),
            0,
            0,
            pi_mean,
        )
    }

    fn share(
        scope: NotificationScope,
        run_index: usize,
        dots: usize,
        in_circle: u64,
        estimate: f64,
    ) -> Self {
        Self {
            kind: NotificationKind::SharePiValue,
            value: format!("{estimate}"),
            is_final: scope == NotificationScope::Session,
            scope,
            run_index,
            in_circle,
            dots,
            estimate,
        }
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.scope {
            NotificationScope::Session => write!(f, "pi = {:.8} (final)", self.estimate),
            _ => write!(
                f,
                "run {}: {} of {} dots inside, pi = {:.8}",
                self.run_index + 1,
                self.in_circle,
                self.dots,
                self.estimate
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_session_messages_are_final() {
        assert!(!Notification::batch(0, 10, 8, 3.2).is_final);
        assert!(!Notification::run(0, 10, 8, 3.2).is_final);
        assert!(Notification::session(4, 3.15).is_final);
    }

    #[test]
    fn wire_shape_keeps_kind_and_text_value() {
        let v = serde_json::to_value(Notification::run(2, 4, 3, 3.0)).unwrap();
        assert_eq!(v["kind"], json!("share_pi_value"));
        assert_eq!(v["value"], json!("3"));
        assert_eq!(v["is_final"], json!(false));
        assert_eq!(v["scope"], json!("run"));
        assert_eq!(v["run_index"], json!(2));
        assert_eq!(v["in_circle"], json!(3));
    }

    #[test]
    fn session_message_points_at_last_run() {
        let n = Notification::session(10, 3.14);
        assert_eq!(n.run_index, 9);
        assert_eq!(n.value, "3.14");
        assert_eq!(n.to_string(), "pi = 3.14000000 (final)");
    }
}
