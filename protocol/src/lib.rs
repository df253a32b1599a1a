//! Wire format of shareable game state.
//!
//! A session is shipped to the conversation partner as a flat string-to-string
//! mapping embedded in a message URL, and rebuilt from the same mapping in a
//! fresh process with no memory of the sender. Decoding therefore leans
//! toward graceful degradation: auxiliary fields default, only a missing
//! target sinks the restore.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;

use numerito_core::{GameKind, GuessState};

pub use codec::*;
pub use error::*;
pub use query::*;

mod codec;
mod error;
mod query;

/// Stable query-parameter keys of the shared-state mapping.
pub mod keys {
    pub const GAME_TYPE: &str = "gameType";
    pub const TARGET: &str = "target";
    pub const ATTEMPTS: &str = "attempts";
    pub const ACTIVE: &str = "active";
}

/// State recovered from an inbound payload, tagged by game.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RestoredGame {
    NumberGuess(GuessState),
}

/// Reads the declared game discriminator without touching game fields.
pub fn game_kind(fields: &BTreeMap<String, String>) -> Option<GameKind> {
    fields
        .get(keys::GAME_TYPE)
        .and_then(|id| GameKind::from_wire_id(id))
}

/// Dispatches an inbound mapping to the codec of its declared game.
///
/// A missing or unknown `gameType` means the payload was never ours to
/// restore, the per-game codecs are only reached through this gate.
pub fn restore(fields: &BTreeMap<String, String>) -> Result<RestoredGame, DecodeError> {
    match game_kind(fields) {
        Some(GameKind::NumberGuess) => decode(fields).map(RestoredGame::NumberGuess),
        None => Err(DecodeError::UnsupportedGame),
    }
}
