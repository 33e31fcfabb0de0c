//! Statistical analyzers
//!
//! Each analyzer takes an [`IntGenerator`](crate::generator::IntGenerator),
//! draws its own sample stream from it and reduces that stream to a table or
//! a scalar:
//! - Frequency: occurrence count per value
//! - Interval: histogram of gaps between repeats of the same value
//! - Chi-square: goodness of fit against a uniform expectation
//! - Autocorrelation: lag-k correlation of the materialized sequence
//! - Runs: number of maximal blocks of equal consecutive values
//!
//! Nothing is shared between analyzers; every table lives for one call.

pub mod autocorrelation;
pub mod chi_square;
pub mod frequency;
pub mod interval;
pub mod runs;

pub use autocorrelation::{autocorrelation, autocorrelation_of};
pub use chi_square::{chi_square, chi_square_statistic};
pub use frequency::{frequency, FrequencyTable};
pub use interval::{interval, IntervalHistogram};
pub use runs::runs;

use crate::error::{Error, Result};

/// Reserve `len` slots up front and fill them with `value`
///
/// Fails with `Error::Allocation` instead of aborting when the reservation
/// cannot be satisfied.
pub(crate) fn filled<T: Clone>(what: &'static str, len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| Error::Allocation { what, len })?;
    buf.resize(len, value);
    Ok(buf)
}

/// Reject an empty value range before anything is drawn from it
pub(crate) fn require_range(n: u32) -> Result<()> {
    if n == 0 {
        return Err(Error::DegenerateInput("value range must be greater than 0".into()));
    }
    Ok(())
}

/// Reject a zero sample size for statistics that need at least one draw
pub(crate) fn require_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(Error::DegenerateInput("sample size must be greater than 0".into()));
    }
    Ok(())
}
