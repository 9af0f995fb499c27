//! Random provider for baseline gameplay
//!
//! Makes uniformly random (but valid) selections. Serves as a baseline for
//! smarter strategies and for fuzzing the engine in tests.

use crate::core::Hand;
use crate::game::provider::MoveProvider;
use crate::Result;
use rand::Rng;

/// A provider that makes random choices
pub struct RandomProvider {
    rng: Box<dyn rand::RngCore>,
}

impl RandomProvider {
    /// Create a random provider with a thread-local RNG
    pub fn new() -> Self {
        RandomProvider {
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Create a random provider with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        RandomProvider {
            rng: Box::new(rand::rngs::StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveProvider for RandomProvider {
    fn select_reveal(&mut self, hand: &Hand, count: usize) -> Result<Vec<usize>> {
        let sample = rand::seq::index::sample(&mut self.rng, hand.len(), count);
        Ok(sample.into_vec())
    }

    fn select_play(&mut self, hand: &Hand) -> Result<usize> {
        Ok(self.rng.gen_range(0..hand.len()))
    }
}
