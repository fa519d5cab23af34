use crate::error::{EstimationError, Result};
use crate::session::SessionState;
use crate::statistics::Aggregate;
use std::path::PathBuf;
use std::time::Duration;

/// What happened to the session log.
#[derive(Debug, Clone, PartialEq)]
pub enum LogOutcome {
    /// Too few completed runs to be worth keeping.
    Skipped,
    Written(PathBuf),
    /// The write failed; the session result is still valid.
    Failed(String),
}

/// `(pi_mean, pi_std_dev, pi_error, pi_results, timestamp)`.
pub type SessionTuple = (Option<f64>, Option<f64>, Option<f64>, Vec<f64>, String);

/// Everything presentation and logging need from a finished session.
#[derive(Debug, Clone)]
pub struct SessionResult {
    pub state: SessionState,
    /// `None` when no run completed.
    pub aggregate: Option<Aggregate>,
    pub pi_results: Vec<f64>,
    pub timestamp: String,
    pub requested_runs: usize,
    pub dots: usize,
    pub elapsed: Duration,
    pub log: LogOutcome,
}

impl SessionResult {
    pub fn aggregate(&self) -> Result<&Aggregate> {
        self.aggregate.as_ref().ok_or(EstimationError::EmptySession)
    }

    pub fn pi_mean(&self) -> Option<f64> {
        self.aggregate.map(|a| a.pi_mean)
    }

    pub fn pi_error(&self) -> Option<f64> {
        self.aggregate.map(|a| a.pi_error)
    }

    pub fn pi_std_dev(&self) -> Option<f64> {
        self.aggregate.map(|a| a.pi_std_dev)
    }

    pub fn completed_runs(&self) -> usize {
        self.pi_results.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.state == SessionState::Cancelled
    }

    /// No run completed before the session ended.
    pub fn is_empty(&self) -> bool {
        self.pi_results.is_empty()
    }

    pub fn into_tuple(self) -> SessionTuple {
        (
            self.pi_mean(),
            self.pi_std_dev(),
            self.pi_error(),
            self.pi_results,
            self.timestamp,
        )
    }
}
