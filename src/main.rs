//! randbattery CLI entry point
//!
//! Runs the full battery with the fixed parameters and prints the report to
//! stdout. Logs go to stderr.

use randbattery::config::defaults::DEFAULT_LOG_FILTER;
use randbattery::source::SeededSource;
use randbattery::{Battery, BatteryConfig};
use std::io::{BufWriter, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut source = SeededSource::from_clock();
    let battery = Battery::new(BatteryConfig::default());
    info!(
        "randbattery v{}: seed {}, {} draws per analyzer",
        env!("CARGO_PKG_VERSION"),
        source.seed(),
        battery.config().sample_size
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = battery.run(&mut source, &mut out);
    let _ = out.flush();
    drop(out);

    match result {
        Ok(summary) if summary.succeeded() => {}
        Ok(summary) => {
            eprintln!(
                "Error: {} of {} report sections failed",
                summary.failures, summary.sections
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
