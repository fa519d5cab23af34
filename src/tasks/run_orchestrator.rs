use crate::config::EstimationConfig;
use crate::error::{EstimationError, Result};
use crate::persistence::write_session_log;
use crate::sampling::{MonteCarloEstimator, RunOutcome};
use crate::session::{
    CancellationToken, LogOutcome, Notification, ProgressSink, Session, SessionResult,
};
use crate::statistics::{BasicEstimator, Estimator};
use rand::Rng;
use rand::rngs::StdRng;
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Runs `run_count` trials of `dot_count` dots with the default configuration.
pub fn estimate(run_count: usize, dot_count: usize) -> Result<SessionResult> {
    RunOrchestrator::new(EstimationConfig::new(run_count, dot_count))?.estimate()
}

/// Sequences the runs of one session and finalizes it.
pub struct RunOrchestrator<R: Rng = StdRng> {
    config: EstimationConfig,
    estimator: MonteCarloEstimator<R>,
    cancel: CancellationToken,
    progress: Option<Box<dyn ProgressSink>>,
}

impl RunOrchestrator<StdRng> {
    pub fn new(config: EstimationConfig) -> Result<Self> {
        config.validate()?;
        let estimator = MonteCarloEstimator::from_seed_option(config.seed);
        Self::with_estimator(config, estimator)
    }
}

impl<R: Rng> RunOrchestrator<R> {
    pub fn with_estimator(
        config: EstimationConfig,
        estimator: MonteCarloEstimator<R>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            estimator,
            cancel: CancellationToken::new(),
            progress: None,
        })
    }

    pub fn with_progress(self, tx: Sender<Notification>) -> Self {
        self.with_sink(tx)
    }

    pub fn with_sink<S: ProgressSink + 'static>(mut self, sink: S) -> Self {
        self.progress = Some(Box::new(sink));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    pub fn estimate(&mut self) -> Result<SessionResult> {
        let started = Instant::now();
        let mut session = Session::new(self.config.run_count, self.config.dot_count);
        session.start()?;

        let Self {
            config,
            estimator,
            cancel,
            progress,
        } = self;

        let should_stop = || {
            cancel.is_cancelled()
                || config
                    .max_seconds
                    .is_some_and(|s| started.elapsed().as_secs() >= s)
        };
        let mut running_mean = BasicEstimator::default();

        for run_index in 0..config.run_count {
            if should_stop() {
                session.cancel()?;
                break;
            }

            let outcome = estimator.run_batched(
                config.dot_count,
                config.batch_size,
                &should_stop,
                |p| {
                    if let Some(sink) = progress.as_mut() {
                        sink.notify(Notification::batch(
                            run_index,
                            p.dots_done,
                            p.in_circle,
                            p.estimate,
                        ));
                    }
                },
            )?;

            match outcome {
                RunOutcome::Completed(run) => {
                    let pi = run.pi_estimate_final();
                    session.push_result(pi)?;
                    running_mean.add(pi);
                    debug!(
                        run = run_index + 1,
                        pi,
                        running_mean = running_mean.estimation(),
                        "run completed"
                    );
                    if let Some(sink) = progress.as_mut() {
                        sink.notify(Notification::run(run_index, run.dots(), run.in_circle(), pi));
                    }
                }
                RunOutcome::Interrupted { dots_done } => {
                    debug!(run = run_index + 1, dots_done, "run interrupted");
                    session.cancel()?;
                    break;
                }
            }
        }

        let aggregate = match session.aggregate(config.std_dev_kind) {
            Ok(a) => Some(a),
            Err(EstimationError::EmptySession) => None,
            Err(e) => return Err(e),
        };
        if let (Some(a), Some(sink)) = (aggregate.as_ref(), progress.as_mut()) {
            sink.notify(Notification::session(a.runs, a.pi_mean));
        }

        let timestamp = session.timestamp();
        let log = persist(config, &session, &timestamp);

        match &aggregate {
            Some(a) => info!(
                state = %session.state(),
                runs = a.runs,
                dots = config.dot_count,
                pi = a.pi_mean,
                error = a.pi_error,
                std_dev = a.pi_std_dev,
                "session finished"
            ),
            None => info!(state = %session.state(), "session finished without completed runs"),
        }

        Ok(SessionResult {
            state: session.state(),
            aggregate,
            requested_runs: session.requested_runs(),
            dots: session.dots(),
            timestamp,
            elapsed: started.elapsed(),
            log,
            pi_results: session.into_pi_results(),
        })
    }
}

fn persist(config: &EstimationConfig, session: &Session, timestamp: &str) -> LogOutcome {
    if session.completed_runs() < config.log_threshold {
        return LogOutcome::Skipped;
    }
    match write_session_log(&config.log_dir, timestamp, session.pi_results()) {
        Ok(path) => {
            debug!(path = %path.display(), "session log written");
            LogOutcome::Written(path)
        }
        Err(e) => {
            warn!(dir = %config.log_dir.display(), error = %e, "could not write session log");
            LogOutcome::Failed(e.to_string())
        }
    }
}
