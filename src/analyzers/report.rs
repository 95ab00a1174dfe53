//! Read-only report accessors over a finished [`TrafficAnalyzer`].

use serde::Serialize;

use crate::analyzers::aggregate::TrafficAnalyzer;
use crate::analyzers::types::{DailyTotal, Slot, WindowTotal};

impl TrafficAnalyzer {
    /// Per-day totals, ascending by date.
    pub fn daily_traffic(&self) -> Vec<DailyTotal> {
        self.day_counts
            .iter()
            .map(|(&date, &count)| DailyTotal { date, count })
            .collect()
    }

    /// The up-to-three busiest half-hour slots, descending by count.
    /// Ties are broken by ascending timestamp: the half-hour map is
    /// date-ordered and the sort is stable.
    pub fn top3_half_hours(&self) -> Vec<Slot> {
        let mut slots: Vec<Slot> = self
            .half_hour_counts
            .iter()
            .map(|(&timestamp, &count)| Slot { timestamp, count })
            .collect();
        slots.sort_by(|a, b| b.count.cmp(&a.count));
        slots.truncate(3);
        slots
    }

    /// The contiguous 1.5-hour window with the least traffic, or an empty
    /// list when no three contiguous slots ever formed. Ties are broken
    /// by the earliest window start, since results are examined in
    /// emission order.
    pub fn least_traffic_window(&self) -> Vec<WindowTotal> {
        self.window
            .results()
            .iter()
            .copied()
            .reduce(|best, candidate| if candidate.count < best.count { candidate } else { best })
            .into_iter()
            .collect()
    }
}

/// Immutable snapshot of all four reports, ready for serialization.
#[derive(Debug, Serialize)]
pub struct TrafficReport {
    pub total_count: u64,
    pub daily_traffic: Vec<DailyTotal>,
    pub top3_half_hours: Vec<Slot>,
    pub least_traffic_window: Vec<WindowTotal>,
}

impl TrafficReport {
    pub fn from_analyzer(analyzer: &TrafficAnalyzer) -> Self {
        TrafficReport {
            total_count: analyzer.total_count(),
            daily_traffic: analyzer.daily_traffic(),
            top3_half_hours: analyzer.top3_half_hours(),
            least_traffic_window: analyzer.least_traffic_window(),
        }
    }
}
