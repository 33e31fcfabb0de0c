//! Default run parameters
//!
//! Named constants for every fixed parameter of a battery run

/// Number of distinct values each integer generator is asked for (N)
pub const DEFAULT_VALUE_RANGE: u32 = 10_000;

/// Draws per analyzer (S)
pub const DEFAULT_SAMPLE_SIZE: usize = 100_000_000;

/// Bucket count of the interval histogram; gaps at or above it are discarded
pub const DEFAULT_INTERVAL_BUCKETS: usize = 100;

/// Lag used by the autocorrelation analyzer
pub const DEFAULT_LAG: usize = 1;

/// Number of normal deviates printed for illustration
pub const DEFAULT_NORMAL_SAMPLES: usize = 10;

/// Mean of the illustrated normal distribution
pub const DEFAULT_NORMAL_MEAN: f64 = 0.0;

/// Standard deviation of the illustrated normal distribution
pub const DEFAULT_NORMAL_STD_DEV: f64 = 1.0;

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
