//! Seeded shuffling for deals.
//!
//! A deal seed fully determines the layout. Context streams are derived
//! with `FxHasher`, which is stable across builds, so a seed recorded in
//! one session replays the same deal in another.
//!
//! ```
//! use rust_spider::core::GameRng;
//!
//! let mut deck_a: Vec<u8> = (0..104).collect();
//! let mut deck_b = deck_a.clone();
//! GameRng::new(42).for_context("deal").shuffle(&mut deck_a);
//! GameRng::new(42).for_context("deal").shuffle(&mut deck_b);
//!
//! assert_eq!(deck_a, deck_b);
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// ChaCha8 stream plus the seed it came from.
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

    /// Draw a fresh seed from thread-local entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed to pass to [`GameRng::new`] to replay this stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream keyed by `context`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
