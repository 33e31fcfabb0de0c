//! Ambient random sources
//!
//! This module defines the `AmbientSource` trait: the raw integer stream every
//! generator adapter is built on. Each source is a single file implementing
//! the trait.
//!
//! A source is constructed once and owned by whoever drives the run; there is
//! no process-wide generator state.

pub mod scripted;
pub mod seeded;

pub use scripted::ScriptedSource;
pub use seeded::SeededSource;

/// Trait for the underlying integer stream under test
pub trait AmbientSource {
    /// Returns the source name (e.g., "seeded", "scripted")
    fn name(&self) -> &'static str;

    /// Inclusive upper bound of `next_integer`, fixed for the source's lifetime
    fn max(&self) -> u32;

    /// Draw an integer uniformly distributed over `[0, max]`
    fn next_integer(&mut self) -> u32;

    /// Number of distinct values `next_integer` can return
    fn span(&self) -> u64 {
        self.max() as u64 + 1
    }

    /// Map one draw into the half-open interval `[0.0, 1.0)`
    fn next_unit_half_open(&mut self) -> f64 {
        let draw = self.next_integer() as f64;
        draw / (self.max() as f64 + 1.0)
    }

    /// Map one draw into the open interval `(0.0, 1.0)`
    ///
    /// Never returns exactly 0 or 1, so the result is safe to pass to `ln`.
    fn next_unit_open(&mut self) -> f64 {
        let draw = self.next_integer() as f64;
        (draw + 1.0) / (self.max() as f64 + 2.0)
    }
}
