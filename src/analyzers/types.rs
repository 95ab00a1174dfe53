//! Data types used by the aggregation pipeline.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// A single half-hour counter record: how many vehicles passed in the
/// 30-minute slot starting at `timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub timestamp: NaiveDateTime,
    pub count: u64,
}

impl Slot {
    pub fn new(timestamp: NaiveDateTime, count: u64) -> Self {
        Slot { timestamp, count }
    }
}

/// Total vehicles seen on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub count: u64,
}

/// Sum of three contiguous half-hour slots, keyed by the first slot's
/// timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowTotal {
    pub start: NaiveDateTime,
    pub count: u64,
}
