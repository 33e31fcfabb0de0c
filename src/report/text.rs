//! Plain-text report formatter
//!
//! Line-oriented output, one section per test, each preceded by a blank
//! line. Floats use six decimals.

use crate::report::{Outcome, ReportFormatter, TestKind, TestReport};

/// Text formatter - outputs the human-readable battery report
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn format(&self, report: &TestReport) -> String {
        let mut output = String::new();

        // Header
        output.push('\n');
        match (&report.kind, &report.result) {
            (
                TestKind::NormalSamples,
                Ok(Outcome::NormalSamples {
                    mean,
                    std_dev,
                    samples,
                }),
            ) => {
                output.push_str(&format!(
                    "[{}] {} samples (mean={}, std={}):\n",
                    report.kind,
                    samples.len(),
                    mean,
                    std_dev
                ));
            }
            _ => {
                output.push_str(&format!("[{}] {}\n", report.kind, report.label));
            }
        }

        let outcome = match &report.result {
            Ok(outcome) => outcome,
            Err(e) => {
                output.push_str(&format!("Error: {}\n", e));
                return output;
            }
        };

        match outcome {
            Outcome::Frequency(table) => {
                output.push_str("Value\tFrequency\n");
                for (value, count) in table.iter() {
                    output.push_str(&format!("{}\t{}\n", value, count));
                }
            }
            Outcome::Interval(histogram) => {
                output.push_str("Interval\tCount\n");
                for (gap, count) in histogram.nonzero() {
                    output.push_str(&format!("{}\t\t{}\n", gap, count));
                }
            }
            Outcome::ChiSquare(chi2) => {
                output.push_str(&format!("Chi-square value: {:.6}\n", chi2));
            }
            Outcome::Autocorrelation { lag, value } => {
                output.push_str(&format!("Autocorrelation (lag {}): {:.6}\n", lag, value));
            }
            Outcome::Runs(count) => {
                output.push_str(&format!("Number of runs: {}\n", count));
            }
            Outcome::NormalSamples { samples, .. } => {
                let line: Vec<String> = samples.iter().map(|x| format!("{:.6}", x)).collect();
                output.push_str(&line.join(" "));
                output.push('\n');
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{frequency, interval};
    use crate::error::Error;
    use crate::generator::SequenceGenerator;

    fn scenario() -> SequenceGenerator {
        SequenceGenerator::new(vec![0, 1, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2]).unwrap()
    }

    #[test]
    fn test_frequency_section() {
        let table = frequency(&mut scenario(), 4, 12).unwrap();
        let report = TestReport::new(TestKind::Frequency, "seq", Ok(Outcome::Frequency(table)));
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Frequency Test] seq\nValue\tFrequency\n0\t3\n1\t4\n2\t3\n3\t2\n"
        );
    }

    #[test]
    fn test_interval_section() {
        let histogram = interval(&mut scenario(), 4, 12, 100).unwrap();
        let report = TestReport::new(TestKind::Interval, "seq", Ok(Outcome::Interval(histogram)));
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Interval Test] seq\nInterval\tCount\n1\t\t1\n4\t\t6\n5\t\t1\n"
        );
    }

    #[test]
    fn test_scalar_sections() {
        let report = TestReport::new(TestKind::ChiSquare, "seq", Ok(Outcome::ChiSquare(2.0 / 3.0)));
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Chi-square Test] seq\nChi-square value: 0.666667\n"
        );

        let report = TestReport::new(
            TestKind::Autocorrelation,
            "seq",
            Ok(Outcome::Autocorrelation {
                lag: 1,
                value: -0.25,
            }),
        );
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Autocorrelation Test] seq\nAutocorrelation (lag 1): -0.250000\n"
        );

        let report = TestReport::new(TestKind::Runs, "seq", Ok(Outcome::Runs(11)));
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Runs Test] seq\nNumber of runs: 11\n"
        );
    }

    #[test]
    fn test_normal_section() {
        let report = TestReport::new(
            TestKind::NormalSamples,
            "normal",
            Ok(Outcome::NormalSamples {
                mean: 0.0,
                std_dev: 1.0,
                samples: vec![0.5, -1.25],
            }),
        );
        assert_eq!(
            TextFormatter.format(&report),
            "\n[Normal Distribution Test] 2 samples (mean=0, std=1):\n0.500000 -1.250000\n"
        );
    }

    #[test]
    fn test_failure_section() {
        let report = TestReport::new(
            TestKind::Autocorrelation,
            "seq",
            Err(Error::ZeroVariance { samples: 5 }),
        );
        let output = TextFormatter.format(&report);
        assert!(report.is_failure());
        assert!(output.starts_with("\n[Autocorrelation Test] seq\nError: "));
        assert!(output.contains("Zero variance"));
        assert!(!output.contains("NaN"));
    }

    #[test]
    fn test_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
    }
}
