use crate::statistics::estimators::Estimator;

/// Streaming mean estimator: `mean = sum / len`.
///
/// NaN observations are ignored. The estimate is NaN until the first value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: usize,
    sum: f64,
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let e = BasicEstimator::default();
        assert!(e.estimation().is_nan());
        assert_eq!(e.count(), 0);
    }

    #[test]
    fn mean_skips_nan() {
        let mut e = BasicEstimator::default();
        for v in [3.0, f64::NAN, 3.5, 2.5] {
            e.add(v);
        }
        assert_eq!(e.count(), 3);
        assert_eq!(e.estimation(), 3.0);
    }
}
