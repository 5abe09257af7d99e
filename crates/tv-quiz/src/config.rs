//! Configuration for a quiz session.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for a quiz session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible questions. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Number of questions to ask (at least 1).
    pub rounds: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: 10,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of rounds (clamped to at least 1).
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    /// Build the random source for a session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
