//! CLI entry point for the traffic counter tool.
//!
//! Provides subcommands for printing an aggregate report for a counter
//! log and for exporting its daily totals to CSV.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use traffic_counter::{
    analyzers::{aggregate::TrafficAnalyzer, report::TrafficReport},
    output::{append_daily_totals, print_json, print_summary},
    parser::load_records,
};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "traffic_counter")]
#[command(about = "A tool to analyze half-hourly vehicle counter logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the aggregate traffic report for a counter log
    Report {
        /// Path to the counter log file
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the report as JSON instead of a summary
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
    /// Append a log's daily totals to a CSV file
    Export {
        /// Path to the counter log file
        #[arg(value_name = "FILE")]
        file: String,

        /// CSV file to append daily totals to
        #[arg(short, long, default_value = "daily_totals.csv")]
        output: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/traffic_counter.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("traffic_counter.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Report { file, json } => {
            let report = build_report(&file)?;
            if json {
                print_json(&report)?;
            } else {
                print_summary(&report);
            }
        }
        Commands::Export { file, output } => {
            let report = build_report(&file)?;
            append_daily_totals(&output, &report)?;
        }
    }

    Ok(())
}

/// Loads a counter log and runs the full aggregation over it.
#[tracing::instrument]
fn build_report(file: &str) -> Result<TrafficReport> {
    let records = load_records(file)?;
    let analyzer = TrafficAnalyzer::from_slots(records);
    Ok(TrafficReport::from_analyzer(&analyzer))
}
