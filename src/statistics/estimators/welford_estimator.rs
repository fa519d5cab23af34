use crate::config::StdDevKind;
use crate::statistics::estimators::Estimator;

/// Streaming mean and variance (Welford's update).
#[derive(Debug, Default, Clone, Copy)]
pub struct WelfordEstimator {
    len: usize,
    mean: f64,
    m2: f64,
}

impl WelfordEstimator {
    /// Standard deviation of the values seen so far.
    ///
    /// Zero when there are too few values for the chosen divisor.
    pub fn std_dev(&self, kind: StdDevKind) -> f64 {
        let divisor = match kind {
            StdDevKind::Population => self.len,
            StdDevKind::Sample => self.len.saturating_sub(1),
        };
        if divisor == 0 {
            return 0.0;
        }
        (self.m2 / divisor as f64).max(0.0).sqrt()
    }
}

impl Estimator for WelfordEstimator {
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        let delta = v - self.mean;
        self.mean += delta / self.len as f64;
        self.m2 += delta * (v - self.mean);
    }

    fn estimation(&self) -> f64 {
        if self.len > 0 { self.mean } else { f64::NAN }
    }

    fn count(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_textbook_values() {
        let mut e = WelfordEstimator::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            e.add(v);
        }
        assert_relative_eq!(e.estimation(), 5.0);
        assert_relative_eq!(e.std_dev(StdDevKind::Population), 2.0);
        assert_relative_eq!(
            e.std_dev(StdDevKind::Sample),
            (32.0f64 / 7.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn single_value_has_no_spread() {
        let mut e = WelfordEstimator::default();
        e.add(3.2);
        assert_eq!(e.std_dev(StdDevKind::Population), 0.0);
        assert_eq!(e.std_dev(StdDevKind::Sample), 0.0);
    }
}
