mod convergence_curve;
mod convergence_point;

pub use convergence_curve::{ConvergenceCurve, CurveFormat, MIN_CHART_POINTS};
pub use convergence_point::ConvergencePoint;
