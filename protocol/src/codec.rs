use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use numerito_core::{AttemptCount, GameKind, GameRules, Guess, GuessState};

use crate::keys;
use crate::DecodeError;

/// Serializes a session state into the flat mapping embedded in a message.
///
/// Exactly four entries, always. Key order is irrelevant to the contract;
/// the map type gives a canonical order anyway.
pub fn encode(state: &GuessState) -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            keys::GAME_TYPE.to_string(),
            GameKind::NumberGuess.wire_id().to_string(),
        ),
        (keys::TARGET.to_string(), state.target.to_string()),
        (keys::ATTEMPTS.to_string(), state.attempts_used.to_string()),
        (
            keys::ACTIVE.to_string(),
            if state.active { "true" } else { "false" }.to_string(),
        ),
    ])
}

/// Rebuilds a session state from an inbound mapping.
///
/// Unknown keys are ignored for forward compatibility. `attempts` and
/// `active` degrade to safe defaults, a target that cannot be recovered
/// fails the whole restore since a session without one is meaningless.
/// The declared game type is not checked here, dispatch happens one level up.
pub fn decode(fields: &BTreeMap<String, String>) -> Result<GuessState, DecodeError> {
    let rules = GameRules::DEFAULT;

    let target: Guess = fields
        .get(keys::TARGET)
        .and_then(|raw| raw.parse().ok())
        .filter(|&target| rules.contains(target))
        .ok_or(DecodeError::InvalidState {
            field: keys::TARGET,
        })?;

    let attempts_used: AttemptCount = fields
        .get(keys::ATTEMPTS)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);

    // "true"/"false" only, case-sensitive. Anything ambiguous resumes as a
    // finished game rather than a live one.
    let active = match fields.get(keys::ACTIVE).map(String::as_str) {
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            log::warn!("Unrecognized active flag {:?}, treating session as ended", other);
            false
        }
        None => false,
    };

    Ok(GuessState::restored(target, attempts_used, active, rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|&(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn encode_produces_exactly_four_entries() {
        let state = GuessState {
            target: 42,
            attempts_used: 3,
            active: true,
        };

        let encoded = encode(&state);

        assert_eq!(encoded.len(), 4);
        assert_eq!(encoded["gameType"], "numberGuess");
        assert_eq!(encoded["target"], "42");
        assert_eq!(encoded["attempts"], "3");
        assert_eq!(encoded["active"], "true");
    }

    #[test]
    fn round_trip_preserves_valid_states() {
        for target in [1, 42, 100] {
            for attempts_used in [0, 3, 7] {
                for active in [true, false] {
                    // a full budget cannot coexist with a live session
                    let active = active && attempts_used < 7;
                    let state = GuessState {
                        target,
                        attempts_used,
                        active,
                    };

                    assert_eq!(decode(&encode(&state)), Ok(state));
                }
            }
        }
    }

    #[test]
    fn missing_auxiliary_fields_default_toward_terminal() {
        let fields = fields(&[("gameType", "numberGuess"), ("target", "17")]);

        let state = decode(&fields).unwrap();

        assert_eq!(state.target, 17);
        assert_eq!(state.attempts_used, 0);
        assert!(!state.active);
    }

    #[test]
    fn missing_target_fails_the_restore() {
        let fields = fields(&[("gameType", "numberGuess"), ("attempts", "2")]);

        assert_eq!(
            decode(&fields),
            Err(DecodeError::InvalidState { field: "target" })
        );
    }

    #[test]
    fn unparsable_target_fails_the_restore() {
        let fields = fields(&[("target", "banana")]);

        assert_eq!(
            decode(&fields),
            Err(DecodeError::InvalidState { field: "target" })
        );
    }

    #[test]
    fn out_of_range_target_fails_the_restore() {
        for raw in ["0", "101", "255"] {
            let fields = fields(&[("target", raw)]);

            assert_eq!(
                decode(&fields),
                Err(DecodeError::InvalidState { field: "target" })
            );
        }
    }

    #[test]
    fn overdrawn_attempt_counter_is_clamped_to_game_over() {
        let fields = fields(&[("target", "5"), ("attempts", "9"), ("active", "true")]);

        let state = decode(&fields).unwrap();

        assert_eq!(state.target, 5);
        assert_eq!(state.attempts_used, 7);
        assert!(!state.active);
    }

    #[test]
    fn unparsable_attempts_default_to_zero() {
        for raw in ["-1", "many", "3.5", "300"] {
            let fields = fields(&[("target", "5"), ("attempts", raw), ("active", "true")]);

            let state = decode(&fields).unwrap();

            assert_eq!(state.attempts_used, 0, "attempts {:?}", raw);
            assert!(state.active);
        }
    }

    #[test]
    fn active_flag_is_case_sensitive_and_fails_safe() {
        for raw in ["True", "FALSE", "yes", "1", ""] {
            let fields = fields(&[("target", "5"), ("active", raw)]);

            let state = decode(&fields).unwrap();

            assert!(!state.active, "active {:?}", raw);
        }
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let fields = fields(&[
            ("gameType", "numberGuess"),
            ("target", "42"),
            ("attempts", "1"),
            ("active", "true"),
            ("outcome", "won"),
            ("v", "9"),
        ]);

        let state = decode(&fields).unwrap();

        assert_eq!(state.target, 42);
        assert_eq!(state.attempts_used, 1);
        assert!(state.active);
    }
}
