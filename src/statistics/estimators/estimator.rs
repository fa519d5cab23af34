/// Running statistic over the per-run pi estimates of a session.
///
/// NaN observations are skipped by every implementation, so `count` is the
/// number of values that actually contributed.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// Current value; NaN before the first observation.
    fn estimation(&self) -> f64;

    fn count(&self) -> usize;
}
