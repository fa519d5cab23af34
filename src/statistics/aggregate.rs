use crate::config::StdDevKind;
use crate::error::{EstimationError, Result};
use serde::Serialize;
use std::f64::consts::PI;

/// Summary of the final estimates of every completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    pub runs: usize,
    pub pi_mean: f64,
    /// Signed bias, `pi_mean - PI`.
    pub pi_error: f64,
    pub pi_std_dev: f64,
    pub std_dev_kind: StdDevKind,
}

impl Aggregate {
    /// The single aggregation path for both completed and cancelled sessions.
    ///
    /// With [`StdDevKind::Sample`] and a single value the spread is reported as 0.
    pub fn from_results(values: &[f64], kind: StdDevKind) -> Result<Self> {
        if values.is_empty() {
            return Err(EstimationError::EmptySession);
        }

        let n = values.len();
        let mean = values.iter().sum::<f64>() / n as f64;
        let sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        let divisor = match kind {
            StdDevKind::Population => n,
            StdDevKind::Sample => n - 1,
        };
        let std_dev = if divisor == 0 {
            0.0
        } else {
            (sq / divisor as f64).sqrt()
        };

        Ok(Self {
            runs: n,
            pi_mean: mean,
            pi_error: mean - PI,
            pi_std_dev: std_dev,
            std_dev_kind: kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_is_reported_not_computed() {
        let err = Aggregate::from_results(&[], StdDevKind::Population).unwrap_err();
        assert!(matches!(err, EstimationError::EmptySession));
    }

    #[test]
    fn population_divisor_by_default() {
        let a = Aggregate::from_results(&[3.0, 3.2, 3.4], StdDevKind::Population).unwrap();
        assert_eq!(a.runs, 3);
        assert_relative_eq!(a.pi_mean, 3.2, epsilon = 1e-12);
        assert_relative_eq!(a.pi_error, 3.2 - PI, epsilon = 1e-12);
        assert_relative_eq!(a.pi_std_dev, (0.08f64 / 3.0).sqrt(), epsilon = 1e-12);

        let s = Aggregate::from_results(&[3.0, 3.2, 3.4], StdDevKind::Sample).unwrap();
        assert_relative_eq!(s.pi_std_dev, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn single_run_has_zero_spread() {
        let a = Aggregate::from_results(&[3.1], StdDevKind::Sample).unwrap();
        assert_eq!(a.pi_std_dev, 0.0);
        assert_eq!(a.pi_mean, 3.1);
    }

    proptest! {
        #[test]
        fn order_does_not_matter(
            mut values in prop::collection::vec(0.0f64..=4.0, 1..200),
            shift in 0usize..200,
        ) {
            let a = Aggregate::from_results(&values, StdDevKind::Population).unwrap();
            values.reverse();
            let len = values.len();
            values.rotate_left(shift % len);
            let b = Aggregate::from_results(&values, StdDevKind::Population).unwrap();

            prop_assert!((a.pi_mean - b.pi_mean).abs() < 1e-12);
            prop_assert!((a.pi_std_dev - b.pi_std_dev).abs() < 1e-12);
            prop_assert!((a.pi_error - b.pi_error).abs() < 1e-12);
        }
    }
}
