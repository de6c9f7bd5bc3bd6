//! Injectable randomness
//!
//! Seeding and random entry placement draw from a `RandomSource` so a
//! session can be made reproducible (fixed seed) or fully scripted (tests).

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the two kinds of randomness the grid needs
pub trait RandomSource: fmt::Debug {
    /// Uniform index in `0..len`; `len` is never zero
    fn index(&mut self, len: usize) -> usize;

    /// Fair coin flip
    fn coin(&mut self) -> bool;
}

/// `RandomSource` backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + fmt::Debug> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Deterministic source that replays fixed answers
///
/// Indices and coins cycle; an index larger than the requested range is
/// clamped to its last element.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    coins: Vec<bool>,
    next_index: usize,
    next_coin: usize,
}

impl ScriptedSource {
    /// Always answer `index` (clamped) and flip `false`
    pub fn fixed(index: usize) -> Self {
        Self::new(vec![index], Vec::new())
    }

    pub fn new(indices: Vec<usize>, coins: Vec<bool>) -> Self {
        Self {
            indices,
            coins,
            next_index: 0,
            next_coin: 0,
        }
    }
}

impl RandomSource for ScriptedSource {
    fn index(&mut self, len: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.next_index % self.indices.len()];
        self.next_index += 1;
        value.min(len.saturating_sub(1))
    }

    fn coin(&mut self) -> bool {
        if self.coins.is_empty() {
            return false;
        }
        let value = self.coins[self.next_coin % self.coins.len()];
        self.next_coin += 1;
        value
    }
}
