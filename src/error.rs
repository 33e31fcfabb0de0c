//! Error types for randbattery

use thiserror::Error;

/// Main error type for randbattery operations
#[derive(Error, Debug)]
pub enum Error {
    /// A sample size, value range or lag that no statistic can be computed from
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Every sampled value was identical, so the variance is exactly zero
    #[error("Zero variance: all {samples} sampled values are identical")]
    ZeroVariance { samples: usize },

    /// A statistic came out as NaN or infinity
    #[error("Non-finite {statistic} statistic")]
    NonFinite { statistic: &'static str },

    /// A table or sample buffer could not be reserved
    #[error("Allocation failure: cannot reserve {len} entries for {what}")]
    Allocation { what: &'static str, len: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors caused by the statistical input itself rather than
    /// the environment (allocation, output) or the configuration
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::DegenerateInput(_) | Error::ZeroVariance { .. } | Error::NonFinite { .. }
        )
    }
}

/// Result type alias for randbattery operations
pub type Result<T> = std::result::Result<T, Error>;
