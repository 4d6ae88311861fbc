//! One round of the three-door game.
//!
//! ## Round
//!
//! ```text
//! car     ~ U{0,1,2}
//! choice  ~ U{0,1,2}
//! Stay    → final = choice
//! Switch  → host  ~ U{0,1,2}, redrawn until host ∉ {car, choice}
//!           final = 3 - choice - host
//! win     ⇔ final == car
//! ```
//!
//! The host is sampled by rejection rather than picked directly, so the host's
//! knowledge of the car is the only constraint applied to otherwise uniform
//! draws. At most two of the three doors are ever inadmissible, so the loop
//! terminates with probability one after fewer than three draws on average.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::error::EntropyError;
use crate::sim::selector::DoorSelector;

/// Number of doors in the classic game.
pub const DOOR_COUNT: u32 = 3;

/// Sum of all door indices, `0 + 1 + 2`.
const DOOR_INDEX_SUM: u32 = DOOR_COUNT * (DOOR_COUNT - 1) / 2;

/// What the player does after the host opens a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the originally chosen door.
    Stay,
    /// Move to the one remaining closed door.
    Switch,
}

impl Strategy {
    /// Both strategies, stay first.
    pub const ALL: [Strategy; 2] = [Strategy::Stay, Strategy::Switch];

    /// Map the boolean switch flag onto a strategy.
    pub fn from_switch(switch: bool) -> Self {
        if switch {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }

    pub fn is_switch(self) -> bool {
        self == Strategy::Switch
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Stay => write!(f, "stay"),
            Strategy::Switch => write!(f, "switch"),
        }
    }
}

/// Record of a single simulated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    /// Door hiding the car.
    pub car: u32,
    /// Door the player picked first.
    pub initial_choice: u32,
    /// Door opened by the host. Only drawn under [`Strategy::Switch`].
    pub host_reveal: Option<u32>,
    /// Door the player ends on.
    pub final_choice: u32,
}

impl Round {
    /// Whether the player ends on the car.
    pub fn won(&self) -> bool {
        self.final_choice == self.car
    }
}

/// Simulate one round and return the full record.
pub fn play_round<S: DoorSelector + ?Sized>(
    selector: &mut S,
    strategy: Strategy,
) -> Result<Round, EntropyError> {
    let car = selector.select(DOOR_COUNT)?;
    let initial_choice = selector.select(DOOR_COUNT)?;

    let (host_reveal, final_choice) = match strategy {
        Strategy::Stay => (None, initial_choice),
        Strategy::Switch => {
            let host = loop {
                let candidate = selector.select(DOOR_COUNT)?;
                if candidate != initial_choice && candidate != car {
                    break candidate;
                }
            };
            (Some(host), DOOR_INDEX_SUM - initial_choice - host)
        }
    };

    Ok(Round {
        car,
        initial_choice,
        host_reveal,
        final_choice,
    })
}

/// Simulate one round and report whether the player won.
pub fn run_trial<S: DoorSelector + ?Sized>(
    selector: &mut S,
    switch: bool,
) -> Result<bool, EntropyError> {
    play_round(selector, Strategy::from_switch(switch)).map(|round| round.won())
}

/// Play `trials` rounds with one strategy and count the wins.
pub fn count_wins<S: DoorSelector + ?Sized>(
    selector: &mut S,
    strategy: Strategy,
    trials: u64,
) -> Result<u64, EntropyError> {
    let mut wins = 0u64;
    for _ in 0..trials {
        if play_round(selector, strategy)?.won() {
            wins += 1;
        }
    }
    Ok(wins)
}
