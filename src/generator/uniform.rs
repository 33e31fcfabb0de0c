//! Rejection/rescaling generator
//!
//! Scales each ambient draw onto `[0, n)` instead of reducing it. Pure
//! scaling of a span that `n` does not divide still leaves some buckets with
//! one extra source value, so draws from the ragged top of the span are
//! rejected first:
//!
//! - `limit = span - span % n` (largest multiple of `n` within the span)
//! - redraw while `draw >= limit`
//! - return `floor(draw * n / limit)`
//!
//! Every bucket then owns exactly `limit / n` source values. When `n` exceeds
//! the span there is no whole multiple to keep, and the draw is scaled
//! through the half-open unit interval instead.

use crate::constants::labels;
use crate::generator::IntGenerator;
use crate::source::AmbientSource;

/// Integer generator free of modulo bias
pub struct UniformGenerator<'a, S: AmbientSource + ?Sized> {
    source: &'a mut S,
}

impl<'a, S: AmbientSource + ?Sized> UniformGenerator<'a, S> {
    pub fn new(source: &'a mut S) -> Self {
        Self { source }
    }
}

impl<S: AmbientSource + ?Sized> IntGenerator for UniformGenerator<'_, S> {
    fn label(&self) -> &str {
        labels::UNIFORM
    }

    fn draw(&mut self, n: u32) -> u32 {
        let n = n as u64;
        let span = self.source.span();
        if n > span {
            return (self.source.next_unit_half_open() * n as f64) as u32;
        }

        let limit = span - span % n;
        loop {
            let draw = self.source.next_integer() as u64;
            if draw < limit {
                // draw < limit, so draw * n / limit < n <= u32::MAX
                return (draw * n / limit) as u32;
            }
        }
    }
}
