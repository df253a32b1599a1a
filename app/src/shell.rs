use std::collections::BTreeMap;

use chrono::prelude::*;
use numerito_core::{CATALOG, GameKind, Guess, GuessEngine, GuessOutcome};
use numerito_protocol as protocol;
use serde::{Deserialize, Serialize};

use crate::session::GameSession;
use crate::settings::Settings;

/// The single screen slot of the extension container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Menu,
    Playing(GameKind),
}

/// Host events driving the shell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    SelectGame(GameKind),
    SubmitGuess(Guess),
    NewGame,
    ResumeReceived(BTreeMap<String, String>),
    ExitToMenu,
    UpdateSettings(Settings),
}

/// Screen register plus the session it presents.
///
/// Pure state machine: the host renders from the accessors, feeds events
/// back in as [`Msg`] values, and uses the `update` return to decide
/// whether anything observable changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Shell {
    screen: Screen,
    session: Option<GameSession>,
    settings: Settings,
    seed: u64,
    games_started: u64,
}

impl Shell {
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, Settings::default())
    }

    pub fn with_settings(seed: u64, settings: Settings) -> Self {
        Self {
            screen: Screen::Menu,
            session: None,
            settings,
            seed,
            games_started: 0,
        }
    }

    pub const fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Menu data source, in display order.
    pub const fn catalog(&self) -> &'static [GameKind] {
        CATALOG
    }

    /// Outcome of the most recent guess, for display-text selection.
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.session
            .as_ref()
            .and_then(|session| session.engine.last_outcome())
    }

    /// Encode of the current state for the outbound message.
    pub fn share_fields(&self) -> Option<BTreeMap<String, String>> {
        self.session
            .as_ref()
            .map(|session| protocol::encode(&session.engine.state()))
    }

    /// Same, rendered as the query fragment the host puts on the URL.
    pub fn share_query(&self) -> Option<String> {
        self.share_fields()
            .map(|fields| protocol::to_query(&fields))
    }

    pub fn update(&mut self, msg: Msg, now: DateTime<Utc>) -> bool {
        use Msg::*;

        match msg {
            SelectGame(kind) => {
                log::debug!("mount game screen: {:?}", kind);
                self.mount_fresh_session(kind);
                true
            }
            SubmitGuess(guess) => {
                if !matches!(self.screen, Screen::Playing(_)) {
                    return false;
                }
                let Some(session) = self.session.as_mut() else {
                    return false;
                };
                match session.submit_guess(guess, now) {
                    Ok(outcome) => {
                        log::debug!("guess {} -> {:?}", guess, outcome);
                        true
                    }
                    Err(err) => {
                        log::debug!("guess {} rejected: {}", guess, err);
                        false
                    }
                }
            }
            NewGame => {
                let Screen::Playing(kind) = self.screen else {
                    return false;
                };
                self.mount_fresh_session(kind);
                true
            }
            ResumeReceived(fields) => self.resume(&fields),
            ExitToMenu => {
                // teardown-then-mount: the session itself stays for re-entry
                if self.screen == Screen::Menu {
                    false
                } else {
                    self.screen = Screen::Menu;
                    true
                }
            }
            UpdateSettings(settings) => {
                if self.settings == settings {
                    false
                } else {
                    self.settings = settings;
                    true
                }
            }
        }
    }

    fn resume(&mut self, fields: &BTreeMap<String, String>) -> bool {
        use protocol::{DecodeError, RestoredGame};

        match protocol::restore(fields) {
            Ok(RestoredGame::NumberGuess(state)) => {
                self.session = Some(GameSession::new(GuessEngine::from_state(state)));
                self.screen = Screen::Playing(GameKind::NumberGuess);
                true
            }
            Err(DecodeError::InvalidState { field }) => {
                // The payload was ours but unusable, so the fallback is a
                // brand-new session of the declared game.
                log::warn!("Inbound state has no usable `{}`, starting fresh", field);
                match protocol::game_kind(fields) {
                    Some(kind) => {
                        self.mount_fresh_session(kind);
                        true
                    }
                    None => false,
                }
            }
            Err(DecodeError::UnsupportedGame) => {
                log::warn!("Ignoring payload for an unknown game type");
                false
            }
        }
    }

    fn mount_fresh_session(&mut self, kind: GameKind) {
        let engine = kind.create_engine(self.next_seed());
        self.session = Some(GameSession::new(engine));
        self.screen = Screen::Playing(kind);
    }

    fn next_seed(&mut self) -> u64 {
        self.games_started = self.games_started.wrapping_add(1);
        self.seed
            .wrapping_add(self.games_started.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}
