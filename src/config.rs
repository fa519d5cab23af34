use crate::error::{EstimationError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const DEFAULT_BATCH_SIZE: usize = 1_000;
pub const DEFAULT_LOG_THRESHOLD: usize = 10;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Verbosity tier of the progress renderer. Never read by the estimator.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AnimationLevel {
    /// First and last run only, plus the final aggregate.
    Min,
    /// Every completed run.
    #[default]
    Med,
    /// Every completed run and every dot batch inside it.
    Max,
}

/// Divisor used for the spread of the per-run estimates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StdDevKind {
    /// Divide by `N`: the completed runs are the whole population.
    #[default]
    Population,
    /// Divide by `N - 1`.
    Sample,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EstimationConfig {
    pub run_count: usize,
    pub dot_count: usize,
    pub animation: AnimationLevel,
    pub seed: Option<u64>,
    pub max_seconds: Option<u64>,
    /// Dots sampled between two cancellation polls inside a run.
    pub batch_size: usize,
    /// Minimum completed runs before the session log is written.
    pub log_threshold: usize,
    pub log_dir: PathBuf,
    pub std_dev_kind: StdDevKind,
}

impl EstimationConfig {
    pub fn new(run_count: usize, dot_count: usize) -> Self {
        Self {
            run_count,
            dot_count,
            animation: AnimationLevel::default(),
            seed: None,
            max_seconds: None,
            batch_size: DEFAULT_BATCH_SIZE,
            log_threshold: DEFAULT_LOG_THRESHOLD,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            std_dev_kind: StdDevKind::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_animation(mut self, animation: AnimationLevel) -> Self {
        self.animation = animation;
        self
    }

    pub fn with_max_seconds(mut self, secs: u64) -> Self {
        self.max_seconds = Some(secs);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_log_threshold(mut self, threshold: usize) -> Self {
        self.log_threshold = threshold;
        self
    }

    pub fn with_log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_std_dev_kind(mut self, kind: StdDevKind) -> Self {
        self.std_dev_kind = kind;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.run_count == 0 {
            return Err(EstimationError::InvalidArgument(
                "run_count must be > 0".into(),
            ));
        }
        if self.dot_count == 0 {
            return Err(EstimationError::InvalidArgument(
                "dot_count must be > 0".into(),
            ));
        }
        if self.batch_size == 0 {
            return Err(EstimationError::InvalidArgument(
                "batch_size must be > 0".into(),
            ));
        }
        Ok(())
    }
}
