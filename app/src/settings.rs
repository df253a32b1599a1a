use numerito_core::GameKind;
use serde::{Deserialize, Serialize};

use crate::storage::StorageKey;

/// Player preferences persisted across extension launches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub default_game: GameKind,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_game: GameKind::NumberGuess,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "numerito:settings:v1";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_uses_a_versioned_namespace() {
        assert_eq!(<Settings as StorageKey>::KEY, "numerito:settings:v1");
    }
}
