//! [`RandomGenerator`] implementations.
//!
//! - [`ThreadRandom`]: `rand::thread_rng()`, the default.
//! - [`SeededRandom`]: `StdRng` seeded from configuration, reproducible runs.
//! - [`FixedRandom`]: replays a fixed sequence, for tests and scripted demos.

use crate::domain::ports::RandomGenerator;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomGenerator for ThreadRandom {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomGenerator for SeededRandom {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

/// Returns values from a provided sequence, cycling when exhausted.
///
/// Values are clamped into the requested range.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<i32>,
    index: usize,
}

impl FixedRandom {
    /// An empty sequence behaves like `constant(0)`.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomGenerator for FixedRandom {
    fn random_range(&mut self, min: i32, max: i32) -> i32 {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.index % self.values.len()]
        };
        self.index = self.index.wrapping_add(1);
        value.clamp(min, max)
    }
}
