//! Sliding 1.5-hour window over contiguous half-hour slots.

use std::collections::{BTreeMap, VecDeque};

use chrono::{Duration, NaiveDateTime};

use crate::analyzers::types::{Slot, WindowTotal};

/// Tracks a sliding window of up to three contiguous 30-minute slots and
/// records the sum of every completed triple.
///
/// Consecutive triples overlap by two slots: once the window fills, the
/// oldest slot is dropped and its count subtracted from the running sum,
/// so a contiguous run of `L >= 3` slots yields `L - 2` results. A gap
/// (anything other than exactly 30 minutes between slots) resets the
/// window to the incoming slot alone.
#[derive(Debug, Default)]
pub struct TripleWindow {
    /// Timestamps currently in the window. Holds 0, 1 or 2 entries
    /// between calls; reaches 3 only transiently inside [`advance`].
    window: VecDeque<NaiveDateTime>,
    /// Sum of the counts of the slots currently in the window.
    running_sum: u64,
    /// Completed triples, in emission order.
    results: Vec<WindowTotal>,
}

impl TripleWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next slot, which the caller must supply in ascending
    /// timestamp order. `half_hours` is the per-slot count map owned by
    /// the aggregator; the slot's own count must already be in it so the
    /// evicted slot's count can be looked up on slide.
    pub fn advance(&mut self, slot: Slot, half_hours: &BTreeMap<NaiveDateTime, u64>) {
        match self.window.back() {
            None => {
                self.window.push_back(slot.timestamp);
                self.running_sum = slot.count;
            }
            Some(&last) if slot.timestamp - last == Duration::minutes(30) => {
                self.window.push_back(slot.timestamp);
                self.running_sum += slot.count;

                if self.window.len() == 3 {
                    let first = self.window[0];
                    self.results.push(WindowTotal {
                        start: first,
                        count: self.running_sum,
                    });
                    // Slide: drop the oldest slot and recover its count
                    // from the half-hour map rather than storing it twice.
                    self.window.pop_front();
                    self.running_sum -= half_hours.get(&first).copied().unwrap_or(0);
                }
            }
            Some(_) => {
                // Gap detected, start over from the incoming slot.
                self.window.clear();
                self.window.push_back(slot.timestamp);
                self.running_sum = slot.count;
            }
        }
    }

    /// All completed triples seen so far, in emission order.
    pub fn results(&self) -> &[WindowTotal] {
        &self.results
    }
}
