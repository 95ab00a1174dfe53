//! Line parser and file loader for half-hourly counter logs.
//!
//! Each non-empty line is `<ISO-8601 local timestamp> <count>`, e.g.
//! `2016-12-01T05:00 5`. Timestamps are accepted with or without a
//! seconds field.

use anyhow::{Context, Result, bail};
use chrono::NaiveDateTime;
use std::path::Path;
use tracing::debug;

use crate::analyzers::types::Slot;

const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parses one log line into a [`Slot`].
///
/// # Errors
///
/// Returns an error if the line does not have exactly two fields, the
/// timestamp is not ISO-8601, or the count is not a non-negative integer.
pub fn parse_line(line: &str) -> Result<Slot> {
    let mut fields = line.split_whitespace();
    let (Some(timestamp), Some(count), None) = (fields.next(), fields.next(), fields.next())
    else {
        bail!("expected '<timestamp> <count>', got: {line:?}");
    };

    let timestamp = parse_timestamp(timestamp)?;
    let count: u64 = count
        .parse()
        .with_context(|| format!("invalid count: {count:?}"))?;

    Ok(Slot::new(timestamp, count))
}

fn parse_timestamp(s: &str) -> Result<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(timestamp);
        }
    }
    bail!("invalid timestamp: {s:?}")
}

/// Loads and parses a whole counter log file, in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is blank, or contains a
/// malformed line (reported with its line number).
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Slot>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("not able to open file: {}", path.display()))?;

    if text.trim().is_empty() {
        bail!("file {} is blank, can not process", path.display());
    }

    let records: Vec<Slot> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line).with_context(|| format!("line {}", index + 1))
        })
        .collect::<Result<_>>()?;

    debug!(path = %path.display(), records = records.len(), "Counter log loaded");
    Ok(records)
}
