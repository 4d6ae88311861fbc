//! Error types for the simulator.
//!
//! There is exactly one runtime failure inside a simulation: the entropy
//! source refusing to produce bytes. Everything else here belongs to the
//! outer shell (configuration, thread pool, report export).

use thiserror::Error;

/// The secure random source could not produce a value.
///
/// This is never retried. A result computed without the entropy source is
/// worthless, so the error travels straight up to the caller.
#[derive(Debug, Error)]
#[error("entropy source unavailable: {0}")]
pub struct EntropyError(#[from] pub rand::Error);

/// Errors that can occur when loading or validating an experiment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No trial counts were given.
    #[error("trial count list is empty")]
    NoTrialCounts,
    /// A batch of zero trials has no defined win rate.
    #[error("trial count at position {0} is zero")]
    ZeroTrials(usize),
    /// A worker count of zero was requested.
    #[error("thread count must be at least 1")]
    ZeroThreads,
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level error for running an experiment and exporting its results.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = SimError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entropy_error_converts_to_sim_error() {
        let err = EntropyError(rand::Error::new("device gone"));
        let sim: SimError = err.into();
        assert!(matches!(sim, SimError::Entropy(_)));
        assert!(sim.to_string().contains("entropy source unavailable"));
        assert!(sim.to_string().contains("device gone"));
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(ConfigError::NoTrialCounts.to_string(), "trial count list is empty");
        assert_eq!(
            ConfigError::ZeroTrials(2).to_string(),
            "trial count at position 2 is zero"
        );
        let sim: SimError = ConfigError::ZeroThreads.into();
        assert_eq!(sim.to_string(), "invalid configuration: thread count must be at least 1");
    }
}
