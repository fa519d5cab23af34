use crate::config::StdDevKind;
use crate::error::{EstimationError, Result};
use crate::statistics::Aggregate;
use chrono::{DateTime, Local};
use serde::Serialize;
use strum_macros::Display;

/// `chrono` format of the session timestamp, also used in log file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SessionState {
    Pending,
    Running,
    Completed,
    Cancelled,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Completed | SessionState::Cancelled)
    }
}

/// Ordered final estimates of a session's runs.
///
/// Owned by the orchestrator thread; it is the only writer.
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
    requested_runs: usize,
    dots: usize,
    pi_results: Vec<f64>,
    created_at: DateTime<Local>,
}

impl Session {
    pub fn new(requested_runs: usize, dots: usize) -> Self {
        Self {
            state: SessionState::Pending,
            requested_runs,
            dots,
            pi_results: Vec::new(),
            created_at: Local::now(),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        self.transition(SessionState::Pending, SessionState::Running, "start")
    }

    /// Appends a completed run. Reaching the requested count completes the session.
    pub fn push_result(&mut self, pi_estimate: f64) -> Result<()> {
        if self.state != SessionState::Running {
            return Err(EstimationError::InvalidTransition {
                from: self.state,
                action: "append to",
            });
        }
        self.pi_results.push(pi_estimate);
        if self.pi_results.len() == self.requested_runs {
            self.state = SessionState::Completed;
        }
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.transition(SessionState::Running, SessionState::Cancelled, "cancel")
    }

    fn transition(
        &mut self,
        from: SessionState,
        to: SessionState,
        action: &'static str,
    ) -> Result<()> {
        if self.state != from {
            return Err(EstimationError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        self.state = to;
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn requested_runs(&self) -> usize {
        self.requested_runs
    }

    pub fn dots(&self) -> usize {
        self.dots
    }

    pub fn completed_runs(&self) -> usize {
        self.pi_results.len()
    }

    pub fn pi_results(&self) -> &[f64] {
        &self.pi_results
    }

    pub fn into_pi_results(self) -> Vec<f64> {
        self.pi_results
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn timestamp(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn aggregate(&self, kind: StdDevKind) -> Result<Aggregate> {
        Aggregate::from_results(&self.pi_results, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_when_requested_runs_are_appended() {
        let mut s = Session::new(2, 100);
        assert_eq!(s.state(), SessionState::Pending);
        s.start().unwrap();
        s.push_result(3.1).unwrap();
        assert_eq!(s.state(), SessionState::Running);
        s.push_result(3.2).unwrap();
        assert_eq!(s.state(), SessionState::Completed);
        assert!(s.state().is_terminal());
        assert_eq!(s.pi_results(), &[3.1, 3.2]);
    }

    #[test]
    fn appending_outside_running_is_rejected() {
        let mut s = Session::new(1, 10);
        assert!(matches!(
            s.push_result(3.0),
            Err(EstimationError::InvalidTransition {
                from: SessionState::Pending,
                ..
            })
        ));

        s.start().unwrap();
        s.push_result(3.0).unwrap();
        assert!(s.push_result(3.0).is_err());
        assert_eq!(s.completed_runs(), 1);
    }

    #[test]
    fn cancel_only_from_running() {
        let mut s = Session::new(3, 10);
        assert!(s.cancel().is_err());
        s.start().unwrap();
        s.cancel().unwrap();
        assert_eq!(s.state(), SessionState::Cancelled);
        assert!(s.cancel().is_err());
        assert!(s.push_result(3.0).is_err());
        assert!(s.start().is_err());
    }

    #[test]
    fn empty_session_has_no_aggregate() {
        let mut s = Session::new(3, 10);
        s.start().unwrap();
        s.cancel().unwrap();
        assert!(matches!(
            s.aggregate(StdDevKind::Population),
            Err(EstimationError::EmptySession)
        ));
    }

    #[test]
    fn huge_request_allocates_nothing_up_front() {
        let mut s = Session::new(usize::MAX, 1);
        s.start().unwrap();
        s.cancel().unwrap();
        assert_eq!(s.completed_runs(), 0);
    }

    #[test]
    fn timestamp_uses_file_name_format() {
        let s = Session::new(1, 1);
        let ts = s.timestamp();
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[8..9], "_");
        assert!(ts.chars().filter(|c| *c != '_').all(|c| c.is_ascii_digit()));
    }
}
