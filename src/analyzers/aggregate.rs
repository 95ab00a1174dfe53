//! Single-pass aggregation of an ordered half-hour counter feed.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::analyzers::types::Slot;
use crate::analyzers::window::TripleWindow;

/// Accumulates all traffic aggregates in one forward pass over the feed.
///
/// Every analysis run owns its own instance; there is no shared state
/// between runs. Slots must be ingested in ascending timestamp order —
/// that is the caller's responsibility and is not validated here.
#[derive(Debug, Default)]
pub struct TrafficAnalyzer {
    pub(crate) total_count: u64,
    /// Per-date totals, date-ordered.
    pub(crate) day_counts: BTreeMap<NaiveDate, u64>,
    /// Per-slot counts, one entry per distinct timestamp. A repeated
    /// timestamp overwrites the earlier entry, last write wins.
    pub(crate) half_hour_counts: BTreeMap<NaiveDateTime, u64>,
    pub(crate) window: TripleWindow,
}

impl TrafficAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests one record: updates the day bucket, the half-hour map, the
    /// grand total, and advances the sliding window.
    pub fn ingest(&mut self, slot: Slot) {
        *self.day_counts.entry(slot.timestamp.date()).or_insert(0) += slot.count;
        self.half_hour_counts.insert(slot.timestamp, slot.count);
        self.total_count += slot.count;
        self.window.advance(slot, &self.half_hour_counts);
    }

    /// Ingests a whole feed in order.
    pub fn ingest_all<I>(&mut self, slots: I)
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut ingested = 0usize;
        for slot in slots {
            self.ingest(slot);
            ingested += 1;
        }
        debug!(ingested, total = self.total_count, "Feed ingested");
    }

    /// Runs a fresh analyzer over the given feed.
    pub fn from_slots<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Slot>,
    {
        let mut analyzer = TrafficAnalyzer::new();
        analyzer.ingest_all(slots);
        analyzer
    }

    /// Total vehicles across the entire feed, contiguous or not.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }
}
