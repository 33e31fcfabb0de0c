//! Run configuration
//!
//! A battery run has no flags, files or environment switches: every
//! parameter is a named constant from [`defaults`], grouped here so the
//! driver and the tests can pass them around as one value.

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;

/// Fixed parameters of one battery run
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryConfig {
    /// Values are drawn from `[0, value_range)`
    pub value_range: u32,

    /// Draws per analyzer
    pub sample_size: usize,

    /// Interval histogram bucket count
    pub interval_buckets: usize,

    /// Autocorrelation lag
    pub lag: usize,

    /// Number of normal deviates to print
    pub normal_samples: usize,

    /// Mean of the normal generator
    pub normal_mean: f64,

    /// Standard deviation of the normal generator
    pub normal_std_dev: f64,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            value_range: DEFAULT_VALUE_RANGE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            interval_buckets: DEFAULT_INTERVAL_BUCKETS,
            lag: DEFAULT_LAG,
            normal_samples: DEFAULT_NORMAL_SAMPLES,
            normal_mean: DEFAULT_NORMAL_MEAN,
            normal_std_dev: DEFAULT_NORMAL_STD_DEV,
        }
    }
}

impl BatteryConfig {
    /// Reject settings no run could use.
    ///
    /// Zero sample sizes and value ranges pass: the analyzers report them
    /// as degenerate input section by section.
    pub fn validate(&self) -> Result<()> {
        if self.interval_buckets == 0 {
            return Err(Error::Config(
                "interval_buckets must be greater than 0".to_string(),
            ));
        }
        if !self.normal_mean.is_finite() {
            return Err(Error::Config(format!(
                "normal_mean must be finite, got {}",
                self.normal_mean
            )));
        }
        if !self.normal_std_dev.is_finite() || self.normal_std_dev < 0.0 {
            return Err(Error::Config(format!(
                "normal_std_dev must be a finite non-negative number, got {}",
                self.normal_std_dev
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BatteryConfig::default();
        assert_eq!(config.value_range, 10_000);
        assert_eq!(config.sample_size, 100_000_000);
        assert_eq!(config.interval_buckets, 100);
        assert_eq!(config.lag, 1);
        assert_eq!(config.normal_samples, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let config = BatteryConfig {
            interval_buckets: 0,
            ..BatteryConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_normal_parameters_rejected() {
        let config = BatteryConfig {
            normal_std_dev: -1.0,
            ..BatteryConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BatteryConfig {
            normal_mean: f64::NAN,
            ..BatteryConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_sample_size_passes_validation() {
        let config = BatteryConfig {
            sample_size: 0,
            value_range: 0,
            ..BatteryConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
