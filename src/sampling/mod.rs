mod monte_carlo;
mod point;
mod run;

pub use monte_carlo::{BatchProgress, MonteCarloEstimator, RunOutcome};
pub use point::Point;
pub use run::{FIRST_ESTIMATE_SENTINEL, Run};
