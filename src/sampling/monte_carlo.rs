use crate::error::{EstimationError, Result};
use crate::sampling::point::Point;
use crate::sampling::run::{Run, estimate_at};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Larger runs grow as they are sampled, so an oversized request can still be
// interrupted before it exhausts memory.
const PREALLOCATED_DOTS: usize = 1 << 20;

/// State of a run at a batch boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchProgress {
    pub dots_done: usize,
    pub in_circle: u64,
    pub estimate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Completed(Run),
    /// Stopped at a batch boundary; the partial run is discarded.
    Interrupted { dots_done: usize },
}

/// Draws dots and classifies them against the unit quarter-circle.
///
/// Two estimators built with the same seed produce identical runs, whether
/// the dots are drawn by [`run_once`](Self::run_once) or in batches.
#[derive(Debug)]
pub struct MonteCarloEstimator<R: Rng = StdRng> {
    rng: R,
}

impl MonteCarloEstimator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> MonteCarloEstimator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn run_once(&mut self, dot_count: usize) -> Result<Run> {
        check_counts(dot_count, 1)?;
        let mut cumulative = Vec::with_capacity(dot_count.min(PREALLOCATED_DOTS));
        self.draw(&mut cumulative, dot_count);
        Ok(Run::from_cumulative(cumulative))
    }

    // Extends `cumulative` to `end` dots, one point per dot.
    fn draw(&mut self, cumulative: &mut Vec<u64>, end: usize) {
        let mut inside = cumulative.last().copied().unwrap_or(0);
        for _ in cumulative.len()..end {
            if Point::sample(&mut self.rng).is_inside() {
                inside += 1;
            }
            cumulative.push(inside);
        }
    }

    /// Samples `dot_count` dots, polling `should_stop` between batches of
    /// `batch_size` dots and reporting each finished batch to `on_batch`.
    pub fn run_batched<S, F>(
        &mut self,
        dot_count: usize,
        batch_size: usize,
        should_stop: S,
        mut on_batch: F,
    ) -> Result<RunOutcome>
    where
        S: Fn() -> bool,
        F: FnMut(BatchProgress),
    {
        check_counts(dot_count, batch_size)?;
        let mut cumulative = Vec::with_capacity(dot_count.min(PREALLOCATED_DOTS));

        while cumulative.len() < dot_count {
            if !cumulative.is_empty() && should_stop() {
                return Ok(RunOutcome::Interrupted {
                    dots_done: cumulative.len(),
                });
            }

            let end = (cumulative.len() + batch_size).min(dot_count);
            self.draw(&mut cumulative, end);
            let inside = cumulative.last().copied().unwrap_or(0);

            on_batch(BatchProgress {
                dots_done: end,
                in_circle: inside,
                estimate: estimate_at(inside, end),
            });
        }

        Ok(RunOutcome::Completed(Run::from_cumulative(cumulative)))
    }
}

fn check_counts(dot_count: usize, batch_size: usize) -> Result<()> {
    if dot_count == 0 {
        return Err(EstimationError::InvalidArgument(
            "dot_count must be > 0".into(),
        ));
    }
    if batch_size == 0 {
        return Err(EstimationError::InvalidArgument(
            "batch_size must be > 0".into(),
        ));
    }
    Ok(())
}
