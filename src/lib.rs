//! randbattery: Statistical test battery for pseudo-random integer generators
//!
//! Runs classical randomness tests against two ways of turning a raw random
//! integer stream into values in `[0, n)`: plain modulo reduction and
//! rejection/rescaling.
//!
//! ## Features
//!
//! - Swappable ambient sources (seeded `StdRng`, scripted test double)
//! - Modulo, rescaled-uniform and Box-Muller normal generator adapters
//! - Frequency, interval, chi-square, lag-k autocorrelation and runs analyzers
//! - Plain-text report with per-section error diagnostics
//!
//! ## Quick Start
//!
//! ```rust
//! use randbattery::analysis::chi_square;
//! use randbattery::generator::{ModuloGenerator, UniformGenerator};
//! use randbattery::source::SeededSource;
//!
//! // A source whose span (15) is not a multiple of 10
//! let mut source = SeededSource::with_max(42, 14);
//! let biased = chi_square(&mut ModuloGenerator::new(&mut source), 10, 30_000).unwrap();
//!
//! let mut source = SeededSource::with_max(42, 14);
//! let fair = chi_square(&mut UniformGenerator::new(&mut source), 10, 30_000).unwrap();
//!
//! assert!(biased > fair);
//! ```

pub mod analysis;
pub mod battery;
pub mod config;
pub mod constants;
pub mod error;
pub mod generator;
pub mod report;
pub mod source;

// Re-export commonly used types
pub use battery::{Battery, BatterySummary};
pub use config::BatteryConfig;
pub use error::{Error, Result};
pub use generator::{IntGenerator, NormalGenerator};
pub use source::AmbientSource;
