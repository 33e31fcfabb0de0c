//! Lag-k autocorrelation analyzer
//!
//! The only analyzer that needs the whole sample stream in memory: the
//! sequence is materialized, reduced, and dropped before returning.
//!
//! Estimator (windows intentionally differ):
//! - numerator   = sum_{i < S-k} (x_i - mean)(x_{i+k} - mean)
//! - denominator = sum_{i < S}   (x_i - mean)^2
//!
//! By Cauchy-Schwarz the result always lies in [-1, 1].

use crate::analysis::{require_range, require_samples};
use crate::error::{Error, Result};
use crate::generator::IntGenerator;

/// Lag-`lag` autocorrelation of an existing sequence
pub fn autocorrelation_of(sequence: &[u32], lag: usize) -> Result<f64> {
    require_samples(sequence.len())?;
    if lag >= sequence.len() {
        return Err(Error::DegenerateInput(format!(
            "lag {} must be smaller than the sample size {}",
            lag,
            sequence.len()
        )));
    }

    let mean = sequence.iter().map(|&x| x as f64).sum::<f64>() / sequence.len() as f64;

    let numerator: f64 = sequence
        .iter()
        .zip(&sequence[lag..])
        .map(|(&a, &b)| (a as f64 - mean) * (b as f64 - mean))
        .sum();

    let denominator: f64 = sequence
        .iter()
        .map(|&x| {
            let d = x as f64 - mean;
            d * d
        })
        .sum();

    if denominator == 0.0 {
        return Err(Error::ZeroVariance {
            samples: sequence.len(),
        });
    }

    let r = numerator / denominator;
    if !r.is_finite() {
        return Err(Error::NonFinite {
            statistic: "autocorrelation",
        });
    }
    Ok(r)
}

/// Draw `samples` values in `[0, n)` and return their lag-`lag` autocorrelation
pub fn autocorrelation<G: IntGenerator + ?Sized>(
    gen: &mut G,
    n: u32,
    samples: usize,
    lag: usize,
) -> Result<f64> {
    require_range(n)?;
    require_samples(samples)?;

    let mut sequence: Vec<u32> = Vec::new();
    sequence
        .try_reserve_exact(samples)
        .map_err(|_| Error::Allocation {
            what: "sample sequence",
            len: samples,
        })?;
    sequence.extend((0..samples).map(|_| gen.draw(n)));

    autocorrelation_of(&sequence, lag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ModuloGenerator, SequenceGenerator, UniformGenerator};
    use crate::source::SeededSource;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_variance() {
        let mut gen = SequenceGenerator::new(vec![2]).unwrap();
        let err = autocorrelation(&mut gen, 5, 5, 1).unwrap_err();
        assert!(matches!(err, Error::ZeroVariance { samples: 5 }));
    }

    #[test]
    fn test_alternating_sequence() {
        // mean 0.5: numerator 999 * -0.25, denominator 1000 * 0.25
        let mut gen = SequenceGenerator::new(vec![0, 1]).unwrap();
        let r = autocorrelation(&mut gen, 2, 1000, 1).unwrap();
        assert_relative_eq!(r, -0.999, epsilon = 1e-12);
    }

    #[test]
    fn test_asymmetric_windows() {
        // mean 1.5, deviations -1.5 -0.5 0.5 1.5
        // numerator 0.75 - 0.25 + 0.75 = 1.25, denominator 5
        let r = autocorrelation_of(&[0, 1, 2, 3], 1).unwrap();
        assert_relative_eq!(r, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_lag_is_one() {
        let r = autocorrelation_of(&[4, 1, 7, 3], 0).unwrap();
        assert_relative_eq!(r, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bounded_for_random_inputs() {
        for seed in 0..20u64 {
            let mut source = SeededSource::new(seed);
            let mut gen = UniformGenerator::new(&mut source);
            let n = 2 + (seed as u32 % 7);
            for lag in [1usize, 2, 5] {
                let r = autocorrelation(&mut gen, n, 200, lag).unwrap();
                assert!((-1.0..=1.0).contains(&r), "seed {} lag {}: {}", seed, lag, r);
            }
        }
    }

    #[test]
    fn test_independent_draws_near_zero() {
        let mut source = SeededSource::new(77);
        let mut gen = ModuloGenerator::new(&mut source);
        let r = autocorrelation(&mut gen, 10_000, 100_000, 1).unwrap();
        assert!(r.abs() < 0.02, "expected ~0, got {}", r);
    }

    #[test]
    fn test_degenerate_input() {
        let mut gen = SequenceGenerator::new(vec![0, 1]).unwrap();
        assert!(matches!(
            autocorrelation(&mut gen, 2, 0, 1),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            autocorrelation(&mut gen, 0, 10, 1),
            Err(Error::DegenerateInput(_))
        ));
        assert!(matches!(
            autocorrelation(&mut gen, 2, 3, 3),
            Err(Error::DegenerateInput(_))
        ));
    }
}
