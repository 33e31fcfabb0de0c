//! Generator adapters
//!
//! Adapters turn an [`AmbientSource`](crate::source::AmbientSource) into the
//! capabilities the analyzers consume. The analyzers only see these traits,
//! so any adapter (or a deterministic test double) can be swapped in.
//!
//! ## Flex Point
//! Adding a new integer strategy requires:
//! 1. Create `src/generator/{strategy}.rs` implementing `IntGenerator`
//! 2. Add `pub mod {strategy};` below
//! 3. Add it to the generator list in `battery::Battery::run`

pub mod modulo;
pub mod normal;
pub mod sequence;
pub mod uniform;

pub use modulo::ModuloGenerator;
pub use normal::BoxMullerGenerator;
pub use sequence::SequenceGenerator;
pub use uniform::UniformGenerator;

/// An integer generator under test
pub trait IntGenerator {
    /// Label printed in report headers
    fn label(&self) -> &str;

    /// Draw an integer intended to be uniform over `[0, n)`
    ///
    /// Callers guarantee `n > 0`.
    fn draw(&mut self, n: u32) -> u32;
}

/// A real-valued generator targeting a normal distribution
pub trait NormalGenerator {
    /// Label printed in report headers
    fn label(&self) -> &str;

    /// Draw one deviate from N(`mean`, `std_dev`^2)
    fn draw(&mut self, mean: f64, std_dev: f64) -> f64;
}
