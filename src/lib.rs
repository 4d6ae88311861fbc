//! # Monty Hall Simulator
//!
//! Runs repeated randomized rounds of the three-door game show problem under
//! the "stay" and "switch" strategies and reports empirical win rates, which
//! converge on 1/3 and 2/3 respectively.
//!
//! ## Features
//!
//! - **Cryptographic randomness**: door draws come from the OS entropy source
//! - **Honest host**: the opened door is found by rejection sampling
//! - **Optional parallelism**: batches can be split across a rayon pool
//! - **Reports**: console text plus an optional JSON copy
//!
//! ## Quick Start
//!
//! ```no_run
//! use monty_hall_sim::sim::{ExperimentConfig, ExperimentDriver, SecureSelector};
//!
//! let mut driver = ExperimentDriver::new(SecureSelector::secure(), ExperimentConfig::default())?;
//! for batch in driver.run()?.batches {
//!     println!("{}", batch);
//! }
//! # Ok::<(), monty_hall_sim::sim::SimError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ExperimentDriver ──► play_round ──► DoorSelector (OsRng)
//!        ▲                 │
//!        └── win counters ◄┘  ──► BatchReport ──► console / JSON
//! ```

pub mod sim;
