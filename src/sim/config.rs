//! Configuration for an experiment run.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::error::ConfigError;

/// Trial counts reported when nothing else is configured.
pub const DEFAULT_TRIAL_COUNTS: [u64; 6] = [10, 100, 1_000, 10_000, 100_000, 1_000_000];

/// Configuration for the experiment driver.
///
/// # Example
/// ```
/// use monty_hall_sim::sim::ExperimentConfig;
///
/// let config = ExperimentConfig::default().with_trial_counts(vec![100, 1_000]);
/// assert!(config.validate().is_ok());
/// assert!(!config.is_parallel());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Batch sizes, processed in the given order.
    #[serde(default = "default_trial_counts")]
    pub trial_counts: Vec<u64>,

    /// Number of worker threads per batch.
    ///
    /// `None` or `Some(1)` runs every trial on the calling thread.
    #[serde(default)]
    pub threads: Option<usize>,
}

fn default_trial_counts() -> Vec<u64> {
    DEFAULT_TRIAL_COUNTS.to_vec()
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            trial_counts: default_trial_counts(),
            threads: None,
        }
    }
}

impl ExperimentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: replace the trial counts.
    pub fn with_trial_counts(mut self, counts: Vec<u64>) -> Self {
        self.trial_counts = counts;
        self
    }

    /// Builder method: set number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Worker count actually used for a batch.
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or(1).max(1)
    }

    pub fn is_parallel(&self) -> bool {
        self.worker_count() > 1
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trial_counts.is_empty() {
            return Err(ConfigError::NoTrialCounts);
        }

        if let Some(index) = self.trial_counts.iter().position(|&n| n == 0) {
            return Err(ConfigError::ZeroTrials(index));
        }

        if self.threads == Some(0) {
            return Err(ConfigError::ZeroThreads);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let config = ExperimentConfig::default();
        assert_eq!(
            config.trial_counts,
            vec![10, 100, 1_000, 10_000, 100_000, 1_000_000]
        );
        assert_eq!(config.worker_count(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let empty = ExperimentConfig::new().with_trial_counts(vec![]);
        assert!(matches!(empty.validate(), Err(ConfigError::NoTrialCounts)));

        let zero = ExperimentConfig::new().with_trial_counts(vec![10, 0, 5]);
        assert!(matches!(zero.validate(), Err(ConfigError::ZeroTrials(1))));

        let no_workers = ExperimentConfig::new().with_threads(0);
        assert!(matches!(no_workers.validate(), Err(ConfigError::ZeroThreads)));
    }

    #[test]
    fn test_from_json_str_fills_defaults() {
        let config = ExperimentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ExperimentConfig::default());

        let config = ExperimentConfig::from_json_str(r#"{"trial_counts": [5, 50], "threads": 4}"#)
            .unwrap();
        assert_eq!(config.trial_counts, vec![5, 50]);
        assert_eq!(config.worker_count(), 4);
        assert!(config.is_parallel());
    }

    #[test]
    fn test_from_json_str_validates() {
        let err = ExperimentConfig::from_json_str(r#"{"trial_counts": []}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NoTrialCounts));

        let err = ExperimentConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = ExperimentConfig::from_json_file("/nonexistent/monty.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
