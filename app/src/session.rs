use chrono::prelude::*;
use numerito_core::{GameError, Guess, GuessEngine, GuessOutcome};
use serde::{Deserialize, Serialize};

use crate::storage::StorageKey;

/// Derived display state of a session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionStatus {
    Ready,
    InProgress,
    Won,
    Lost,
    /// Terminal session restored from a shared payload. The wire carries
    /// only the active flag, so how it ended is unknowable here.
    Finished,
}

impl SessionStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Finished)
    }
}

/// One play session: the engine plus local bookkeeping that never travels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub engine: GuessEngine,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub move_count: u32,
}

impl GameSession {
    pub fn new(engine: GuessEngine) -> Self {
        Self {
            engine,
            started_at: None,
            ended_at: None,
            move_count: 0,
        }
    }

    pub fn submit_guess(
        &mut self,
        guess: Guess,
        now: DateTime<Utc>,
    ) -> Result<GuessOutcome, GameError> {
        let outcome = self.engine.guess(guess)?;
        self.on_successful_move(now);
        Ok(outcome)
    }

    fn on_successful_move(&mut self, now: DateTime<Utc>) {
        self.move_count = self.move_count.saturating_add(1);

        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        if self.engine.is_finished() && self.ended_at.is_none() {
            self.ended_at = Some(now);
        }
    }

    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    pub fn status(&self) -> SessionStatus {
        use GuessOutcome::*;

        let state = self.engine.state();
        if state.active {
            if state.attempts_used == 0 {
                SessionStatus::Ready
            } else {
                SessionStatus::InProgress
            }
        } else {
            match self.engine.last_outcome() {
                Some(Won) => SessionStatus::Won,
                Some(Lost) => SessionStatus::Lost,
                _ => SessionStatus::Finished,
            }
        }
    }
}

impl StorageKey for GameSession {
    const KEY: &'static str = "numerito:session:v1";
}

#[cfg(test)]
mod tests {
    use numerito_core::GuessState;

    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(0).unwrap()
    }

    fn t(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp_millis(secs * 1000).unwrap()
    }

    #[test]
    fn timestamps_bracket_the_session() {
        let mut session = GameSession::new(GuessEngine::start(42));

        assert_eq!(session.elapsed_secs(t(10)), 0);

        session.submit_guess(50, t(10)).unwrap();
        assert_eq!(session.started_at, Some(t(10)));
        assert_eq!(session.ended_at, None);
        assert_eq!(session.elapsed_secs(t(25)), 15);

        session.submit_guess(42, t(30)).unwrap();
        assert_eq!(session.ended_at, Some(t(30)));
        assert_eq!(session.move_count, 2);
        assert_eq!(session.elapsed_secs(t(99)), 20);
    }

    #[test]
    fn rejected_guess_leaves_bookkeeping_untouched() {
        let mut session = GameSession::new(GuessEngine::start(42));

        assert_eq!(
            session.submit_guess(0, t0()),
            Err(GameError::GuessOutOfRange)
        );
        assert_eq!(session.move_count, 0);
        assert_eq!(session.started_at, None);
    }

    #[test]
    fn status_follows_the_engine() {
        let mut session = GameSession::new(GuessEngine::start(42));
        assert_eq!(session.status(), SessionStatus::Ready);

        session.submit_guess(10, t0()).unwrap();
        assert_eq!(session.status(), SessionStatus::InProgress);

        session.submit_guess(42, t0()).unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.status().is_finished());
    }

    #[test]
    fn restored_terminal_session_reports_finished_not_won_or_lost() {
        let session = GameSession::new(GuessEngine::from_state(GuessState {
            target: 17,
            attempts_used: 7,
            active: false,
        }));

        assert_eq!(session.status(), SessionStatus::Finished);
    }

    #[test]
    fn restored_live_session_is_in_progress() {
        let session = GameSession::new(GuessEngine::from_state(GuessState {
            target: 17,
            attempts_used: 3,
            active: true,
        }));

        assert_eq!(session.status(), SessionStatus::InProgress);
    }
}
