use crate::*;

/// Strategy for choosing the secret number of a fresh session.
pub trait SecretGenerator {
    fn generate(self, rules: GameRules) -> Guess;
}

/// Uniform choice over the allowed range, seeded by the host.
///
/// The seed source does not need to be cryptographically secure, losing a
/// guessing game to a lucky opponent is the worst case.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomSecretGenerator {
    seed: u64,
}

impl RandomSecretGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl SecretGenerator for RandomSecretGenerator {
    fn generate(self, rules: GameRules) -> Guess {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        rng.random_range(rules.min..=rules.max)
    }
}
