mod aggregate;
mod estimators;
mod histogram;
mod preview;

pub use aggregate::Aggregate;
pub use estimators::{BasicEstimator, Estimator, WelfordEstimator};
pub use histogram::{Bin, Histogram};
pub use preview::{ConvergenceCurve, ConvergencePoint, CurveFormat, MIN_CHART_POINTS};
