#![no_std]

use serde::{Deserialize, Serialize};

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod catalog;
mod engine;
mod error;
mod generator;
mod types;

/// Bounds and attempt budget of one guessing session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    pub min: Guess,
    pub max: Guess,
    pub max_attempts: AttemptCount,
}

impl GameRules {
    /// The rules every shared payload is produced and consumed under.
    pub const DEFAULT: Self = Self::new_unchecked(1, 100, 7);

    pub const fn new_unchecked(min: Guess, max: Guess, max_attempts: AttemptCount) -> Self {
        Self {
            min,
            max,
            max_attempts,
        }
    }

    pub fn new(min: Guess, max: Guess, max_attempts: AttemptCount) -> Self {
        let min = min.max(1);
        let max = max.max(min);
        let max_attempts = max_attempts.max(1);
        Self::new_unchecked(min, max, max_attempts)
    }

    pub const fn contains(&self, guess: Guess) -> bool {
        self.min <= guess && guess <= self.max
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Immediate classification of one submitted guess.
///
/// Only `active` survives a round trip through the share payload, so a
/// restored session can tell that it finished but not which terminal
/// outcome it reached.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_hint(self) -> bool {
        matches!(self, Self::TooLow | Self::TooHigh)
    }
}
