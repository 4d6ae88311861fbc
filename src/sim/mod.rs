//! Monty Hall simulation engine.
//!
//! # Overview
//!
//! Three pieces, strictly layered:
//!
//! 1. [`selector`]: uniform door draws from a cryptographic entropy source
//! 2. [`trial`]: one round of the game under a stay or switch strategy
//! 3. [`driver`]: batches of rounds for each configured trial count
//!
//! Results flow back up as booleans, get summed into per-batch counters and
//! end up as a [`BatchReport`] with win percentages.
//!
//! # Example
//!
//! ```
//! use monty_hall_sim::sim::{run_trial, SecureSelector};
//!
//! let mut selector = SecureSelector::secure();
//! let mut wins = 0;
//! for _ in 0..1_000 {
//!     if run_trial(&mut selector, true).unwrap() {
//!         wins += 1;
//!     }
//! }
//! assert!(wins <= 1_000);
//! ```
//!
//! # Theory
//!
//! The first pick hits the car with probability 1/3. Staying keeps exactly
//! that. The host always opens a goat door that is not the player's, so
//! switching wins whenever the first pick missed:
//! ```text
//! P(win | stay)   = 1/3
//! P(win | switch) = 2/3
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod selector;
pub mod trial;

// Re-export main types for convenient access
pub use config::{ExperimentConfig, DEFAULT_TRIAL_COUNTS};
pub use driver::ExperimentDriver;
pub use error::{ConfigError, EntropyError, SimError};
pub use report::{win_percentage, BatchReport, ExperimentReport};
pub use selector::{DoorSelector, EntropySelector, SecureSelector, SeededSelector, SplitSelector};
pub use trial::{count_wins, play_round, run_trial, Round, Strategy, DOOR_COUNT};
