mod basic_estimator;
mod estimator;
mod welford_estimator;

pub use basic_estimator::BasicEstimator;
pub use estimator::Estimator;
pub use welford_estimator::WelfordEstimator;
