//! Default RandomSource adapter over the `rand` crate.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::RandomSource;

/// Seeded random source; the same seed reproduces the same run exactly
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Nondeterministic instance for casual play
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn probability(&mut self) -> f64 {
        self.rng.gen()
    }

    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + self.rng.gen::<f64>() * (max - min)
    }

    fn uniform_int(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}
