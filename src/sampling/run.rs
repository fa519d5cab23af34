/// Placeholder estimate stored at index 0, where `4 * count / index` has no
/// defined value. It carries no numerical meaning.
pub const FIRST_ESTIMATE_SENTINEL: f64 = 4.0;

/// Result of one Monte Carlo trial of `dots()` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    in_circle_cumulative: Vec<u64>,
    pi_estimate_sequence: Vec<f64>,
}

impl Run {
    /// Builds a run from the cumulative inside-count of each prefix.
    ///
    /// `in_circle_cumulative` must be non-empty; the estimator guarantees it.
    pub(crate) fn from_cumulative(in_circle_cumulative: Vec<u64>) -> Self {
        let pi_estimate_sequence = in_circle_cumulative
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                if i == 0 {
                    FIRST_ESTIMATE_SENTINEL
                } else {
                    estimate_at(count, i + 1)
                }
            })
            .collect();

        Self {
            in_circle_cumulative,
            pi_estimate_sequence,
        }
    }

    pub fn dots(&self) -> usize {
        self.in_circle_cumulative.len()
    }

    pub fn in_circle_cumulative(&self) -> &[u64] {
        &self.in_circle_cumulative
    }

    /// Running estimate after each dot. Index 0 holds [`FIRST_ESTIMATE_SENTINEL`].
    pub fn pi_estimate_sequence(&self) -> &[f64] {
        &self.pi_estimate_sequence
    }

    pub fn in_circle(&self) -> u64 {
        self.in_circle_cumulative.last().copied().unwrap_or(0)
    }

    /// The run's point estimate, `4 * inside / dots`.
    ///
    /// Equal to the last element of [`pi_estimate_sequence`](Self::pi_estimate_sequence)
    /// whenever the run has two or more dots. A single-dot run is computed from
    /// its count instead of reporting the sentinel.
    pub fn pi_estimate_final(&self) -> f64 {
        match self.dots() {
            0 => FIRST_ESTIMATE_SENTINEL,
            1 => estimate_at(self.in_circle(), 1),
            _ => self.pi_estimate_sequence[self.dots() - 1],
        }
    }
}

#[inline]
pub(crate) fn estimate_at(in_circle: u64, dots: usize) -> f64 {
    in_circle as f64 * 4.0 / dots as f64
}
