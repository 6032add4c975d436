//! Seedable random source for round randomization.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical sequence of rounds
//! - **Replayable**: Entropy-seeded generators still record their seed
//!
//! ```
//! use rps_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gesture(), b.gesture());
//! assert_eq!(a.coin_flip(), b.coin_flip());
//! ```

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::gesture::Gesture;

/// Deterministic RNG backing a session.
///
/// Uses ChaCha8 for speed. Not meant for anything security sensitive, only
/// for uniform round draws.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        trace!("seeding round rng with {}", seed);
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from OS entropy. The drawn seed is kept for replay.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Fair coin.
    pub fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }

    /// Uniformly random gesture.
    pub fn gesture(&mut self) -> Gesture {
        Gesture::from_index(self.gen_range_usize(0..Gesture::COUNT))
    }
}
