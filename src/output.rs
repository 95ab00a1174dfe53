//! Output formatting and persistence for traffic reports.
//!
//! Supports a human-readable summary, pretty JSON, and CSV append for
//! the daily totals.

use anyhow::Result;
use tracing::{debug, info};

use crate::analyzers::report::TrafficReport;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Logs the four report sections in a compact `value; value; ...` form.
pub fn print_summary(report: &TrafficReport) {
    info!("Total count: {}", report.total_count);
    info!(
        "Day count: {}",
        join(report.daily_traffic.iter().map(|d| format!("{} {}", d.date, d.count)))
    );
    info!(
        "Top 3 half hour count: {}",
        join(
            report
                .top3_half_hours
                .iter()
                .map(|s| format!("{} {}", s.timestamp.format("%Y-%m-%dT%H:%M"), s.count))
        )
    );
    info!(
        "1.5 hour with least traffic: {}",
        join(
            report
                .least_traffic_window
                .iter()
                .map(|w| format!("{} {}", w.start.format("%Y-%m-%dT%H:%M"), w.count))
        )
    );
}

fn join(entries: impl Iterator<Item = String>) -> String {
    entries.collect::<Vec<_>>().join("; ")
}

/// Logs the full report as pretty-printed JSON.
pub fn print_json(report: &TrafficReport) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Appends the report's daily totals as rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_daily_totals(path: &str, report: &TrafficReport) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending daily totals");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for daily in &report.daily_traffic {
        writer.serialize(daily)?;
    }
    writer.flush()?;

    Ok(())
}
