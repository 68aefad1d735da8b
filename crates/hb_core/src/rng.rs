//! Seedable shuffle RNG.
//!
//! Randomized assignment is an injected capability, not ambient state: the
//! balancer receives a [`ShuffleRng`] and tests seed it for reproducible
//! output. Integer-only; unbiased ranges via rejection sampling.
//!
//! Seeding a run is optional. Unseeded runs draw a fresh state from OS
//! entropy, so two runs on identical input may legitimately differ.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// ChaCha20-backed RNG for shuffling assignment pools.
///
/// The mapping from a `u64` seed to the ChaCha20 32-byte seed is explicit:
/// `seed.to_le_bytes()` into the first 8 bytes, the rest zero. This avoids
/// endianness ambiguity and keeps the stream stable across platforms.
#[derive(Debug, Clone)]
pub struct ShuffleRng {
    rng: ChaCha20Rng,
    words_consumed: u64,
}

impl ShuffleRng {
    /// Construct from a 64-bit seed for reproducible runs.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            words_consumed: 0,
        }
    }

    /// Construct from OS entropy (the default for unseeded runs).
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
            words_consumed: 0,
        }
    }

    /// Total number of 64-bit words drawn so far. A fully pre-assigned
    /// roster must leave this at zero.
    pub fn words_consumed(&self) -> u64 {
        self.words_consumed
    }

    /// Draw the next u64 and advance the draw counter. The counter is
    /// advanced nowhere else.
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    /// Unbiased integer in `[0, n)` via rejection sampling.
    ///
    /// Accept `x` when `x >= 2^64 mod n` (computed as `n.wrapping_neg() % n`);
    /// then `x % n` is uniform. Returns `None` if `n == 0`.
    pub fn gen_range(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }

    /// In-place Fisher–Yates shuffle.
    ///
    /// Walks `i = len-1` down to 1, swapping `i` with `j ~ U{0..=i}`.
    /// Slices of length 0 or 1 draw nothing.
    pub fn shuffle_in_place<T>(&mut self, slice: &mut [T]) {
        let len = slice.len();
        if len <= 1 {
            return;
        }
        for i in (1..len).rev() {
            let j = self
                .gen_range(i as u64 + 1)
                .expect("checked: range is non-empty") as usize;
            slice.swap(i, j);
        }
    }
}
