//! Seeded pseudo-random source
//!
//! Wraps the `rand` crate's `StdRng` behind a fixed inclusive maximum, so the
//! integer stream looks like a classic C `rand()`: uniform over `[0, max]`
//! with a range that usually does not divide the requested value count.

use crate::constants::source::DEFAULT_MAX;
use crate::source::AmbientSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pseudo-random ambient source
pub struct SeededSource {
    rng: StdRng,
    max: u32,
    seed: u64,
}

impl SeededSource {
    /// Create a source over `[0, DEFAULT_MAX]`
    ///
    /// Using the same seed will produce the same sequence of values.
    pub fn new(seed: u64) -> Self {
        Self::with_max(seed, DEFAULT_MAX)
    }

    /// Create a source over `[0, max]`
    pub fn with_max(seed: u64, max: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max,
            seed,
        }
    }

    /// Create a source seeded once from the wall clock
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let seed = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp()) as u64;
        Self::new(seed)
    }

    /// The seed this source was built from, for reproducing a run
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl AmbientSource for SeededSource {
    fn name(&self) -> &'static str {
        "seeded"
    }

    fn max(&self) -> u32 {
        self.max
    }

    fn next_integer(&mut self) -> u32 {
        self.rng.gen_range(0..=self.max)
    }
}
