//! Runs analyzer
//!
//! Counts maximal blocks of equal consecutive draws. The first draw opens
//! the first run; every change of value opens another.

use crate::analysis::{require_range, require_samples};
use crate::error::Result;
use crate::generator::IntGenerator;

/// Draw `samples` values in `[0, n)` and count the runs
pub fn runs<G: IntGenerator + ?Sized>(gen: &mut G, n: u32, samples: usize) -> Result<u64> {
    require_range(n)?;
    require_samples(samples)?;

    let mut prev = gen.draw(n);
    let mut count = 1u64;
    for _ in 1..samples {
        let curr = gen.draw(n);
        if curr != prev {
            count += 1;
        }
        prev = curr;
    }
    Ok(count)
}
