use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::time::Instant;

use anyhow::Context;

use analytics::config::RunConfig;
use analytics::AnalyticsEngine;

fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = RunConfig::from_args(std::env::args().skip(1))?;
    let percentile = config.load_percentile()?;

    tracing::info!(
        input = %config.input.display(),
        output = %config.output.display(),
        percentile = %percentile,
        "Starting donation analytics run"
    );

    let input = File::open(&config.input)
        .with_context(|| format!("cannot open input file {}", config.input.display()))?;
    let output = File::create(&config.output)
        .with_context(|| format!("cannot create output file {}", config.output.display()))?;

    let started = Instant::now();
    let mut engine = AnalyticsEngine::new(percentile);
    let summary = engine
        .run(BufReader::new(input), &mut BufWriter::new(output))
        .context("stream processing failed")?;

    tracing::info!(
        lines = summary.lines_seen,
        valid = summary.records_valid,
        dropped = summary.records_dropped,
        reports = summary.reports_emitted,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Run complete"
    );

    Ok(())
}
