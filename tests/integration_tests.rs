use chrono::{NaiveDate, NaiveDateTime};
use traffic_counter::analyzers::aggregate::TrafficAnalyzer;
use traffic_counter::analyzers::report::TrafficReport;
use traffic_counter::parser::load_records;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[test]
fn test_full_pipeline_sample_log() {
    let records = load_records(fixture("sample.txt")).expect("Failed to load sample log");
    let analyzer = TrafficAnalyzer::from_slots(records);
    let report = TrafficReport::from_analyzer(&analyzer);

    assert_eq!(report.total_count, 257);

    let daily: Vec<(NaiveDate, u64)> = report
        .daily_traffic
        .iter()
        .map(|d| (d.date, d.count))
        .collect();
    assert_eq!(
        daily,
        vec![
            (NaiveDate::from_ymd_opt(2016, 12, 1).unwrap(), 159),
            (NaiveDate::from_ymd_opt(2016, 12, 5).unwrap(), 33),
            (NaiveDate::from_ymd_opt(2016, 12, 8).unwrap(), 61),
            (NaiveDate::from_ymd_opt(2016, 12, 9).unwrap(), 4),
        ]
    );

    let top: Vec<(NaiveDateTime, u64)> = report
        .top3_half_hours
        .iter()
        .map(|s| (s.timestamp, s.count))
        .collect();
    assert_eq!(
        top,
        vec![
            (ts(2016, 12, 1, 7, 30), 46),
            (ts(2016, 12, 1, 8, 0), 42),
            (ts(2016, 12, 8, 18, 0), 33),
        ]
    );

    // The quietest 1.5 hours is the 05:00-06:30 block.
    let least: Vec<(NaiveDateTime, u64)> = report
        .least_traffic_window
        .iter()
        .map(|w| (w.start, w.count))
        .collect();
    assert_eq!(least, vec![(ts(2016, 12, 1, 5, 0), 31)]);
}

#[test]
fn test_log_without_contiguous_triple() {
    let records = load_records(fixture("no_triple.txt")).expect("Failed to load log");
    let analyzer = TrafficAnalyzer::from_slots(records);
    let report = TrafficReport::from_analyzer(&analyzer);

    assert_eq!(report.total_count, 78);
    assert!(report.least_traffic_window.is_empty());
    assert_eq!(report.top3_half_hours.len(), 3);
}

#[test]
fn test_missing_log_is_an_error() {
    assert!(load_records(fixture("unknown.txt")).is_err());
}
