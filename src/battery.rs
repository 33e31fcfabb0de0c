//! Battery driver
//!
//! Runs every analyzer against every integer generator and renders each
//! section as soon as it is computed:
//! 1. modulo generator: frequency, interval, chi-square, autocorrelation, runs
//! 2. rescaled uniform generator: the same five analyzers
//! 3. Box-Muller generator: a handful of raw deviates, for illustration
//!
//! An analyzer failure becomes a diagnostic section and the run moves on.
//! Only a failure to write the report stops it.

use crate::analysis::{autocorrelation, chi_square, frequency, interval, runs};
use crate::config::BatteryConfig;
use crate::error::Result;
use crate::generator::{
    BoxMullerGenerator, IntGenerator, ModuloGenerator, NormalGenerator, UniformGenerator,
};
use crate::report::{Outcome, ReportFormatter, TestKind, TestReport, TextFormatter};
use crate::source::AmbientSource;
use std::io::Write;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Tally of what a run wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatterySummary {
    /// Sections rendered, failed ones included
    pub sections: usize,
    /// Sections that carry a diagnostic instead of a result
    pub failures: usize,
}

impl BatterySummary {
    pub fn succeeded(&self) -> bool {
        self.failures == 0
    }
}

/// Report driver holding the fixed run parameters
pub struct Battery<F: ReportFormatter = TextFormatter> {
    config: BatteryConfig,
    formatter: F,
}

impl Battery<TextFormatter> {
    /// Battery rendering plain text
    pub fn new(config: BatteryConfig) -> Self {
        Self::with_formatter(config, TextFormatter)
    }
}

impl<F: ReportFormatter> Battery<F> {
    pub fn with_formatter(config: BatteryConfig, formatter: F) -> Self {
        Self { config, formatter }
    }

    pub fn config(&self) -> &BatteryConfig {
        &self.config
    }

    /// Run the whole battery against `source`, writing the report to `out`
    pub fn run<S, W>(&self, source: &mut S, out: &mut W) -> Result<BatterySummary>
    where
        S: AmbientSource + ?Sized,
        W: Write + ?Sized,
    {
        self.config.validate()?;
        info!(
            "Starting battery on {} source (max {}): N={}, S={}, lag={}, format={}",
            source.name(),
            source.max(),
            self.config.value_range,
            self.config.sample_size,
            self.config.lag,
            self.formatter.name()
        );

        let mut summary = BatterySummary::default();

        self.run_integer_suite(&mut ModuloGenerator::new(&mut *source), out, &mut summary)?;
        self.run_integer_suite(&mut UniformGenerator::new(&mut *source), out, &mut summary)?;

        let mut normal = BoxMullerGenerator::new(&mut *source);
        let samples: Vec<f64> = (0..self.config.normal_samples)
            .map(|_| normal.draw(self.config.normal_mean, self.config.normal_std_dev))
            .collect();
        let report = TestReport::new(
            TestKind::NormalSamples,
            normal.label(),
            Ok(Outcome::NormalSamples {
                mean: self.config.normal_mean,
                std_dev: self.config.normal_std_dev,
                samples,
            }),
        );
        self.emit(&report, out, &mut summary)?;

        out.flush()?;
        info!(
            "Battery finished: {} sections, {} failed",
            summary.sections, summary.failures
        );
        Ok(summary)
    }

    fn run_integer_suite<G, W>(
        &self,
        gen: &mut G,
        out: &mut W,
        summary: &mut BatterySummary,
    ) -> Result<()>
    where
        G: IntGenerator + ?Sized,
        W: Write + ?Sized,
    {
        let label = gen.label().to_string();
        let n = self.config.value_range;
        let samples = self.config.sample_size;
        let lag = self.config.lag;
        let buckets = self.config.interval_buckets;

        self.section(TestKind::Frequency, &label, out, summary, || {
            frequency(&mut *gen, n, samples).map(Outcome::Frequency)
        })?;
        self.section(TestKind::Interval, &label, out, summary, || {
            interval(&mut *gen, n, samples, buckets).map(Outcome::Interval)
        })?;
        self.section(TestKind::ChiSquare, &label, out, summary, || {
            chi_square(&mut *gen, n, samples).map(Outcome::ChiSquare)
        })?;
        self.section(TestKind::Autocorrelation, &label, out, summary, || {
            autocorrelation(&mut *gen, n, samples, lag)
                .map(|value| Outcome::Autocorrelation { lag, value })
        })?;
        self.section(TestKind::Runs, &label, out, summary, || {
            runs(&mut *gen, n, samples).map(Outcome::Runs)
        })?;
        Ok(())
    }

    /// Run one analyzer and render its section, success or not
    fn section<W, A>(
        &self,
        kind: TestKind,
        label: &str,
        out: &mut W,
        summary: &mut BatterySummary,
        analyze: A,
    ) -> Result<()>
    where
        W: Write + ?Sized,
        A: FnOnce() -> Result<Outcome>,
    {
        let started = Instant::now();
        let result = analyze();
        debug!("{} [{}] took {:?}", kind, label, started.elapsed());

        if let Err(e) = &result {
            warn!("{} [{}] failed: {}", kind, label, e);
        }
        self.emit(&TestReport::new(kind, label, result), out, summary)
    }

    fn emit<W: Write + ?Sized>(
        &self,
        report: &TestReport,
        out: &mut W,
        summary: &mut BatterySummary,
    ) -> Result<()> {
        out.write_all(self.formatter.format(report).as_bytes())?;
        summary.sections += 1;
        if report.is_failure() {
            summary.failures += 1;
        }
        Ok(())
    }
}
