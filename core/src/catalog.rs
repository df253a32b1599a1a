use serde::{Deserialize, Serialize};

use crate::*;

/// Closed set of games the extension can offer.
///
/// Selection dispatches over this tag with exhaustive matches, adding a game
/// means adding a variant and letting the compiler point at every table that
/// needs a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    NumberGuess,
}

/// Menu metadata of one catalog entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

/// Menu order of the available games.
pub const CATALOG: &[GameKind] = &[GameKind::NumberGuess];

impl GameKind {
    /// Stable payload discriminator, changing one needs a compatibility plan.
    pub const fn wire_id(self) -> &'static str {
        match self {
            Self::NumberGuess => "numberGuess",
        }
    }

    pub fn from_wire_id(id: &str) -> Option<Self> {
        CATALOG.iter().copied().find(|kind| kind.wire_id() == id)
    }

    pub const fn info(self) -> GameInfo {
        match self {
            Self::NumberGuess => GameInfo {
                title: "Guess the Number",
                emoji: "\u{1F522}",
                description: "I picked a number from 1 to 100. Find it in 7 tries.",
            },
        }
    }

    /// Factory used by the menu screen to start a session of this game.
    pub fn create_engine(self, seed: u64) -> GuessEngine {
        match self {
            Self::NumberGuess => {
                let rules = GameRules::DEFAULT;
                let target = RandomSecretGenerator::new(seed).generate(rules);
                GuessEngine::with_rules(rules, target)
            }
        }
    }
}
