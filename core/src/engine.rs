use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::*;

/// The one persisted and transmitted value of a guessing session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessState {
    pub target: Guess,
    pub attempts_used: AttemptCount,
    pub active: bool,
}

impl GuessState {
    pub const fn new(target: Guess) -> Self {
        Self {
            target,
            attempts_used: 0,
            active: true,
        }
    }

    /// Rebuilds a state from an untrusted snapshot.
    ///
    /// An attempt counter beyond the budget degrades the session to "ended"
    /// instead of resuming an impossible live game.
    pub fn restored(
        target: Guess,
        attempts_used: AttemptCount,
        active: bool,
        rules: GameRules,
    ) -> Self {
        if attempts_used > rules.max_attempts {
            log::warn!(
                "Restored attempt counter {} exceeds budget {}, treating session as ended",
                attempts_used,
                rules.max_attempts
            );
            return Self {
                target,
                attempts_used: rules.max_attempts,
                active: false,
            };
        }
        Self {
            target,
            attempts_used,
            active,
        }
    }

    pub const fn is_finished(&self) -> bool {
        !self.active
    }
}

/// Owns one [`GuessState`] and applies the guessing rules to it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessEngine {
    rules: GameRules,
    state: GuessState,
    last_outcome: Option<GuessOutcome>,
}

impl GuessEngine {
    pub fn start(target: Guess) -> Self {
        Self::with_rules(GameRules::DEFAULT, target)
    }

    pub fn with_rules(rules: GameRules, target: Guess) -> Self {
        let target = target.clamp(rules.min, rules.max);
        Self {
            rules,
            state: GuessState::new(target),
            last_outcome: None,
        }
    }

    /// Cold-start reconstruction from a shared payload.
    ///
    /// `last_outcome` stays `None`: the wire carries `active` but not the
    /// terminal outcome, so a restored finished session knows it ended
    /// without knowing how.
    pub fn from_state(state: GuessState) -> Self {
        Self::from_state_with_rules(GameRules::DEFAULT, state)
    }

    pub fn from_state_with_rules(rules: GameRules, state: GuessState) -> Self {
        let state = GuessState::restored(state.target, state.attempts_used, state.active, rules);
        Self {
            rules,
            state,
            last_outcome: None,
        }
    }

    pub const fn state(&self) -> GuessState {
        self.state
    }

    pub const fn rules(&self) -> GameRules {
        self.rules
    }

    pub const fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub const fn attempts_used(&self) -> AttemptCount {
        self.state.attempts_used
    }

    pub const fn attempts_left(&self) -> AttemptCount {
        self.rules.max_attempts.saturating_sub(self.state.attempts_used)
    }

    pub fn guess(&mut self, guess: Guess) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        self.check_active()?;
        if !self.rules.contains(guess) {
            return Err(GameError::GuessOutOfRange);
        }

        self.state.attempts_used += 1;

        let outcome = match guess.cmp(&self.state.target) {
            Ordering::Equal => Won,
            _ if self.state.attempts_used >= self.rules.max_attempts => Lost,
            Ordering::Less => TooLow,
            Ordering::Greater => TooHigh,
        };

        if outcome.is_terminal() {
            self.state.active = false;
        }
        self.last_outcome = Some(outcome);
        Ok(outcome)
    }

    fn check_active(&self) -> Result<()> {
        if self.state.active {
            Ok(())
        } else {
            Err(GameError::AlreadyEnded)
        }
    }
}
