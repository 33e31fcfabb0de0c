//! Frequency analyzer
//!
//! Counts how often each value in `[0, n)` is drawn.

use crate::analysis::{filled, require_range};
use crate::error::Result;
use crate::generator::IntGenerator;

/// Occurrence count per value
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Zeroed table for values `0..n`
    pub fn new(n: u32) -> Result<Self> {
        Ok(Self {
            counts: filled("frequency table", n as usize, 0)?,
        })
    }

    /// Count one occurrence of `value`
    pub fn record(&mut self, value: u32) {
        self.counts[value as usize] += 1;
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of values in the table
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of draws recorded
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(value, count)` pairs for every value, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().copied().enumerate()
    }
}

/// Draw `samples` values in `[0, n)` and count each one
pub fn frequency<G: IntGenerator + ?Sized>(
    gen: &mut G,
    n: u32,
    samples: usize,
) -> Result<FrequencyTable> {
    require_range(n)?;
    let mut table = FrequencyTable::new(n)?;
    for _ in 0..samples {
        table.record(gen.draw(n));
    }
    Ok(table)
}
