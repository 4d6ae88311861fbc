//! Batch and experiment reports.

use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::error::SimError;

/// Win percentage of `wins` out of `trials`, in the range `[0, 100]`.
pub fn win_percentage(wins: u64, trials: u64) -> f64 {
    wins as f64 * 100.0 / trials as f64
}

/// Aggregate result of one trial count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Rounds played per strategy.
    pub trials: u64,
    pub stay_wins: u64,
    pub stay_percentage: f64,
    pub switch_wins: u64,
    pub switch_percentage: f64,
    /// Switch minus stay, in percentage points.
    pub percentage_difference: f64,
}

impl BatchReport {
    /// Build a report from raw counters.
    ///
    /// # Panics
    /// Panics in debug builds if `trials` is zero or a win count exceeds it.
    pub fn new(trials: u64, stay_wins: u64, switch_wins: u64) -> Self {
        debug_assert!(trials > 0, "batch of zero trials");
        debug_assert!(stay_wins <= trials && switch_wins <= trials);

        let stay_percentage = win_percentage(stay_wins, trials);
        let switch_percentage = win_percentage(switch_wins, trials);

        Self {
            trials,
            stay_wins,
            stay_percentage,
            switch_wins,
            switch_percentage,
            percentage_difference: switch_percentage - stay_percentage,
        }
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🔍 Results after {} simulations:", self.trials)?;
        writeln!(
            f,
            "Sticking to the first choice: {} wins ({:.2}%)",
            self.stay_wins, self.stay_percentage
        )?;
        writeln!(
            f,
            "Switching doors: {} wins ({:.2}%)",
            self.switch_wins, self.switch_percentage
        )?;
        write!(
            f,
            "🚀 By making the switch, you amplify your winning odds by {:.2}%!",
            self.percentage_difference
        )
    }
}

/// All batches of one experiment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperimentReport {
    /// One entry per configured trial count, in run order.
    pub batches: Vec<BatchReport>,
    /// Wall time of the whole run.
    pub elapsed_seconds: f64,
}

impl ExperimentReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, batch: BatchReport) {
        self.batches.push(batch);
    }

    /// Total rounds played across all batches and both strategies.
    pub fn total_rounds(&self) -> u64 {
        self.batches.iter().map(|b| b.trials * 2).sum()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save to JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_exact_two_decimals() {
        let report = BatchReport::new(10_000, 3_333, 6_667);
        assert_eq!(report.stay_percentage, 33.33);
        assert_eq!(report.switch_percentage, 66.67);
        assert_eq!(format!("{:.2}", report.stay_percentage), "33.33");
        assert_eq!(format!("{:.2}", report.percentage_difference), "33.34");
    }

    #[test]
    fn test_difference_can_be_negative() {
        let report = BatchReport::new(10, 6, 4);
        assert_eq!(report.stay_percentage, 60.0);
        assert_eq!(report.switch_percentage, 40.0);
        assert_eq!(report.percentage_difference, -20.0);
    }

    #[test]
    fn test_display_contains_every_figure() {
        let text = BatchReport::new(100, 31, 68).to_string();
        assert!(text.contains("after 100 simulations"));
        assert!(text.contains("31 wins (31.00%)"));
        assert!(text.contains("68 wins (68.00%)"));
        assert!(text.contains("by 37.00%"));
    }

    #[test]
    fn test_experiment_report_json() {
        let mut report = ExperimentReport::new();
        report.push(BatchReport::new(10, 3, 7));
        report.push(BatchReport::new(100, 34, 66));
        assert_eq!(report.total_rounds(), 220);

        let json = report.to_json().unwrap();
        let parsed: ExperimentReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.batches, report.batches);
        assert!(json.contains("\"stay_percentage\""));
    }

    #[test]
    fn test_save_json_to_temp_file() {
        let mut report = ExperimentReport::new();
        report.push(BatchReport::new(10, 2, 8));

        let path = std::env::temp_dir().join(format!("monty_report_{}.json", std::process::id()));
        report.save_json(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(content.contains("\"switch_wins\": 8"));
    }
}
