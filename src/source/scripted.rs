//! Scripted source for deterministic testing
//!
//! Replays a fixed list of integers in a loop. Lets generator adapters be
//! checked against hand-computed outputs.

use crate::error::{Error, Result};
use crate::source::AmbientSource;

/// Ambient source that cycles through a fixed list of values
pub struct ScriptedSource {
    values: Vec<u32>,
    max: u32,
    position: usize,
}

impl ScriptedSource {
    /// Create a scripted source over `[0, max]`
    ///
    /// Fails if `values` is empty or any value exceeds `max`.
    pub fn new(max: u32, values: Vec<u32>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::Config("scripted source needs at least one value".into()));
        }
        if let Some(v) = values.iter().find(|&&v| v > max) {
            return Err(Error::Config(format!(
                "scripted value {} exceeds source maximum {}",
                v, max
            )));
        }
        Ok(Self {
            values,
            max,
            position: 0,
        })
    }
}

impl AmbientSource for ScriptedSource {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn max(&self) -> u32 {
        self.max
    }

    fn next_integer(&mut self) -> u32 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        value
    }
}
