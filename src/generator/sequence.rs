//! Fixed-sequence generator for deterministic testing
//!
//! Feeds the analyzers a known stream so their statistics can be checked by
//! hand.

use crate::constants::labels;
use crate::error::{Error, Result};
use crate::generator::IntGenerator;

/// Integer generator that cycles through a fixed list of values
pub struct SequenceGenerator {
    values: Vec<u32>,
    position: usize,
}

impl SequenceGenerator {
    /// Create a generator replaying `values` in order, wrapping at the end
    pub fn new(values: Vec<u32>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::Config("sequence generator needs at least one value".into()));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }
}

impl IntGenerator for SequenceGenerator {
    fn label(&self) -> &str {
        labels::SEQUENCE
    }

    /// Next scripted value, reduced into `[0, n)`
    fn draw(&mut self, n: u32) -> u32 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value % n
    }
}
