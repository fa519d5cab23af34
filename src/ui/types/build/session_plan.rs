use crate::config::{AnimationLevel, EstimationConfig};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::{EstimationChoice, EstimationParams};
use std::path::PathBuf;

/// A validated session configuration plus what to do with its results.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPlan {
    pub config: EstimationConfig,
    pub curve_export: Option<PathBuf>,
}

fn to_usize(name: &str, v: u64) -> Result<usize, BuildError> {
    usize::try_from(v).map_err(|_| BuildError::InvalidParameter(format!("{name} is too large")))
}

impl TryFrom<EstimationParams> for SessionPlan {
    type Error = BuildError;

    fn try_from(p: EstimationParams) -> Result<Self, Self::Error> {
        let mut config = EstimationConfig::new(
            to_usize("run_count", p.run_count)?,
            to_usize("dot_count", p.dot_count)?,
        )
        .with_animation(AnimationLevel::from(&p.animation))
        .with_batch_size(to_usize("batch_size", p.batch_size)?)
        .with_log_threshold(to_usize("log_threshold", p.log_threshold)?);
        config.seed = p.seed;
        config.max_seconds = p.max_seconds;
        config.validate()?;

        let export = p.curve_export.trim();
        Ok(Self {
            config,
            curve_export: (!export.is_empty()).then(|| PathBuf::from(export)),
        })
    }
}

pub fn build_plan(choice: EstimationChoice) -> Result<SessionPlan, BuildError> {
    match choice {
        EstimationChoice::EstimatePi(p) => SessionPlan::try_from(p),
    }
}
