//! Experiment driver: runs every configured batch for both strategies.
//!
//! Batches run in configuration order. Inside a batch the stay trials and
//! the switch trials are independent, so they are simply run one after the
//! other. With more than one worker each strategy's trials are split into
//! equal shares, every share gets its own selector, and the partial win
//! counts are summed once all shares finish.

use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info};

use crate::sim::config::ExperimentConfig;
use crate::sim::error::{EntropyError, Result};
use crate::sim::report::{BatchReport, ExperimentReport};
use crate::sim::selector::SplitSelector;
use crate::sim::trial::{count_wins, Strategy};

/// Drives repeated trials and aggregates them into reports.
///
/// # Example
/// ```
/// use monty_hall_sim::sim::{ExperimentConfig, ExperimentDriver, SecureSelector};
///
/// let config = ExperimentConfig::default().with_trial_counts(vec![10, 100]);
/// let mut driver = ExperimentDriver::new(SecureSelector::secure(), config).unwrap();
/// let report = driver.run().unwrap();
/// assert_eq!(report.batches.len(), 2);
/// ```
pub struct ExperimentDriver<S: SplitSelector> {
    selector: S,
    config: ExperimentConfig,
    /// Present only when more than one worker is configured.
    pool: Option<ThreadPool>,
}

impl<S: SplitSelector> ExperimentDriver<S> {
    /// Validate `config` and prepare the worker pool if one is needed.
    pub fn new(selector: S, config: ExperimentConfig) -> Result<Self> {
        config.validate()?;

        let pool = if config.is_parallel() {
            Some(
                ThreadPoolBuilder::new()
                    .num_threads(config.worker_count())
                    .thread_name(|i| format!("monty-worker-{}", i))
                    .build()?,
            )
        } else {
            None
        };

        Ok(Self {
            selector,
            config,
            pool,
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Run `trials` rounds of each strategy.
    pub fn run_batch(&mut self, trials: u64) -> Result<BatchReport> {
        let stay_wins = self.count(Strategy::Stay, trials)?;
        let switch_wins = self.count(Strategy::Switch, trials)?;

        let report = BatchReport::new(trials, stay_wins, switch_wins);
        debug!(
            trials,
            stay_wins,
            switch_wins,
            difference = report.percentage_difference,
            "batch complete"
        );
        Ok(report)
    }

    /// Run every configured batch.
    pub fn run(&mut self) -> Result<ExperimentReport> {
        self.run_with_callback(|_| {})
    }

    /// Run every configured batch, calling `callback` after each one.
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<ExperimentReport>
    where
        F: FnMut(&BatchReport),
    {
        let start_time = Instant::now();
        let mut report = ExperimentReport::new();

        info!(
            batches = self.config.trial_counts.len(),
            workers = self.config.worker_count(),
            "starting experiment"
        );

        let counts = self.config.trial_counts.clone();
        for trials in counts {
            let batch = self.run_batch(trials)?;
            callback(&batch);
            report.push(batch);
        }

        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        info!(
            rounds = report.total_rounds(),
            elapsed_seconds = report.elapsed_seconds,
            "experiment finished"
        );

        Ok(report)
    }

    fn count(&mut self, strategy: Strategy, trials: u64) -> Result<u64> {
        let wins = match &self.pool {
            None => count_wins(&mut self.selector, strategy, trials)?,
            Some(pool) => {
                let shares = split_evenly(trials, self.config.worker_count());
                let selectors = shares
                    .iter()
                    .map(|_| self.selector.split())
                    .collect::<std::result::Result<Vec<S>, EntropyError>>()?;

                pool.install(|| {
                    shares
                        .into_par_iter()
                        .zip(selectors)
                        .map(|(share, mut selector)| {
                            debug!(%strategy, share, "worker share");
                            count_wins(&mut selector, strategy, share)
                        })
                        .try_reduce(|| 0, |a, b| Ok(a + b))
                })?
            }
        };
        Ok(wins)
    }
}

/// Split `total` into `parts` shares whose sizes differ by at most one.
fn split_evenly(total: u64, parts: usize) -> Vec<u64> {
    let parts = parts.max(1) as u64;
    let base = total / parts;
    let remainder = total % parts;
    (0..parts)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}
