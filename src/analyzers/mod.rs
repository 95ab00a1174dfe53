//! Traffic aggregation pipeline.
//!
//! This module consumes an ordered feed of half-hourly vehicle counts,
//! maintains the running totals and the sliding 1.5-hour window, and
//! derives the daily, top-3 and least-traffic reports.

pub mod aggregate;
pub mod report;
pub mod types;
pub mod window;
