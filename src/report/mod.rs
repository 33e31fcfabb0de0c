//! Battery report sections
//!
//! One `TestReport` per (test, generator) pair. A section carries either the
//! analyzer's typed outcome or the error that analyzer raised, so a failed
//! statistic is never rendered as a number.

pub mod text;

pub use text::TextFormatter;

use crate::analysis::{FrequencyTable, IntervalHistogram};
use crate::error::Error;

/// Which test a section belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Frequency,
    Interval,
    ChiSquare,
    Autocorrelation,
    Runs,
    NormalSamples,
}

impl TestKind {
    /// Title printed in the section header
    pub fn title(&self) -> &'static str {
        match self {
            TestKind::Frequency => "Frequency Test",
            TestKind::Interval => "Interval Test",
            TestKind::ChiSquare => "Chi-square Test",
            TestKind::Autocorrelation => "Autocorrelation Test",
            TestKind::Runs => "Runs Test",
            TestKind::NormalSamples => "Normal Distribution Test",
        }
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of one analyzer run
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Frequency(FrequencyTable),
    Interval(IntervalHistogram),
    ChiSquare(f64),
    Autocorrelation { lag: usize, value: f64 },
    Runs(u64),
    NormalSamples {
        mean: f64,
        std_dev: f64,
        samples: Vec<f64>,
    },
}

/// A single report section, written once and rendered immediately
#[derive(Debug)]
pub struct TestReport {
    pub kind: TestKind,
    pub label: String,
    pub result: Result<Outcome, Error>,
}

impl TestReport {
    pub fn new(kind: TestKind, label: impl Into<String>, result: Result<Outcome, Error>) -> Self {
        Self {
            kind,
            label: label.into(),
            result,
        }
    }

    /// True if the analyzer failed and the section carries a diagnostic
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Trait for report renderers
pub trait ReportFormatter {
    /// Get the format name
    fn name(&self) -> &str;

    /// Render one section, including its trailing newline
    fn format(&self, report: &TestReport) -> String;
}
