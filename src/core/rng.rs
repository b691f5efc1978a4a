//! Seedable randomness for shuffling and computer decisions.
//!
//! A session owns one master `GameRng`. Shuffling and the computer
//! heuristic each draw from their own context stream, so a test can pin
//! the deck order and still vary (or pin) the computer's exploration draws.
//!
//! ```
//! use ninety_nine::core::GameRng;
//!
//! let master = GameRng::new(7);
//! let mut shuffle = master.for_context("shuffle");
//! let mut again = GameRng::new(7).for_context("shuffle");
//! assert_eq!(shuffle.gen_range_usize(0..52), again.gen_range_usize(0..52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hash::{Hash, Hasher};

/// Context name of the deck shuffling stream.
pub const SHUFFLE_CONTEXT: &str = "shuffle";

/// Context name of the computer decision stream.
pub const COMPUTER_CONTEXT: &str = "computer";

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive a fresh, deterministic generator.
    ///
    /// Session resets fork the master so consecutive games differ while the
    /// whole sequence of games stays reproducible from one seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Independent stream for a named purpose.
    ///
    /// The same context always yields the same stream for the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Random boolean, true with the given probability.
    ///
    /// Probabilities outside `[0, 1]` are clamped.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Unbiased in-place shuffle (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
