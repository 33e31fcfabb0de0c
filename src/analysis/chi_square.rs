//! Chi-square goodness-of-fit analyzer
//!
//! Compares a frequency table against the flat expectation `S / N`:
//! chi2 = sum over values of (observed - expected)^2 / expected.
//! The statistic is never negative and is 0 only for a perfectly flat table.

use crate::analysis::frequency::{frequency, FrequencyTable};
use crate::analysis::{require_range, require_samples};
use crate::error::{Error, Result};
use crate::generator::IntGenerator;

/// Chi-square statistic of an existing table against a uniform expectation
pub fn chi_square_statistic(table: &FrequencyTable) -> Result<f64> {
    if table.is_empty() {
        return Err(Error::DegenerateInput("frequency table has no values".into()));
    }
    let total = table.total();
    if total == 0 {
        return Err(Error::DegenerateInput("frequency table has no samples".into()));
    }

    let expected = total as f64 / table.len() as f64;
    let chi2: f64 = table
        .counts()
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum();

    if !chi2.is_finite() {
        return Err(Error::NonFinite {
            statistic: "chi-square",
        });
    }
    Ok(chi2)
}

/// Draw `samples` values in `[0, n)` and return their chi-square statistic
pub fn chi_square<G: IntGenerator + ?Sized>(gen: &mut G, n: u32, samples: usize) -> Result<f64> {
    require_range(n)?;
    require_samples(samples)?;
    let table = frequency(gen, n, samples)?;
    chi_square_statistic(&table)
}
