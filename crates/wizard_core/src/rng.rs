use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::debug;

/// Seeded random source threaded through every damage roll so a battle can be
/// replayed from its seed.
#[derive(Debug, Clone)]
pub struct BattleRng {
    seed: u64,
    rng: StdRng,
}

impl BattleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.next_u64();
        debug!(target: "wizard_core.rng", seed, "seeded battle rng from entropy");
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Inclusive roll. A single-value range returns that value without
    /// advancing the generator.
    pub fn gen_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        if range.start() >= range.end() {
            return *range.start();
        }
        self.rng.gen_range(range)
    }
}
