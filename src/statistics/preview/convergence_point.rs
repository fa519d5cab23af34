use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Session statistics after the first `runs` completed runs.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ConvergencePoint {
    pub runs: usize,
    pub pi_mean: f64,
    pub pi_error: f64,
    pub pi_std_dev: f64,
}

impl Display for ConvergencePoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "runs={}, pi={:.8}, error={:.8}, st.dev={:.8}",
            self.runs, self.pi_mean, self.pi_error, self.pi_std_dev
        )
    }
}
