use crate::generate::LineGenerator;
use crate::record::parse_record;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

fn lines(seed: u64, count: u64) -> Vec<String> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut generator = LineGenerator::seeded(seed, start);
    let mut out = String::new();
    for i in 0..count {
        generator.write_line(i, &mut out);
    }
    out.lines().map(str::to_string).collect()
}

#[test]
fn every_generated_line_parses() {
    for line in lines(7, 500) {
        assert!(parse_record(&line).is_some(), "unparseable: {line}");
    }
}

#[test]
fn same_seed_same_lines() {
    assert_eq!(lines(42, 50), lines(42, 50));
    assert_ne!(lines(42, 50), lines(43, 50));
}

#[test]
fn timestamps_advance_by_line_index() {
    // Act
    let out = lines(1, 3);

    // Assert
    assert!(out[0].starts_with("2024-01-01T00:00:00.000Z|"));
    assert!(out[2].starts_with("2024-01-01T00:00:00.002Z|"));
}

#[test]
fn failing_statuses_force_level_and_latency_band() {
    for line in lines(99, 1000) {
        let record = parse_record(&line).unwrap();

        match record.status_code {
            500.. => {
                assert_eq!(record.log_level, "ERROR");
                assert!((500..=2000).contains(&record.response_time_ms));
            }
            400.. => {
                assert_eq!(record.log_level, "WARN");
                assert!((20..=500).contains(&record.response_time_ms));
            }
            _ => {
                assert_eq!(record.message, "Request processed successfully");
                assert!((20..=500).contains(&record.response_time_ms));
            }
        }
    }
}

#[test]
fn user_and_order_endpoints_get_an_id() {
    for line in lines(5, 300) {
        let record = parse_record(&line).unwrap();
        if record.endpoint.contains("users") || record.endpoint.contains("orders") {
            let id = record.endpoint.rsplit('/').next().unwrap();
            let id: u32 = id.parse().expect("numeric id suffix");
            assert!((1..=1000).contains(&id));
        }
    }
}
