//! Deterministic random number generation.
//!
//! Every random decision in a game (deck shuffle, random policy choices)
//! comes from a `GameRng` derived from the configured seed, so a seed fully
//! determines a simulated game.
//!
//! ```
//! use rust_president::core::GameRng;
//!
//! let root = GameRng::new(42);
//!
//! // Independent streams for independent purposes
//! let mut deck = root.for_context("deck");
//! let mut policy = root.for_context("policy");
//! let a: Vec<_> = (0..8).map(|_| deck.gen_range_usize(0..1000)).collect();
//! let b: Vec<_> = (0..8).map(|_| policy.gen_range_usize(0..1000)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Seeded ChaCha8 generator with named sub-streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// regardless of how much this generator has been used.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
