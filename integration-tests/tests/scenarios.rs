use integration_tests::harness::{LogFixture, workers};
use logtally_core::scan::{AnalyzeError, analyze_file};
use logtally_core::stats::LogStats;
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn analyze(lines: &[&str]) -> LogStats {
    let fixture = LogFixture::from_lines(lines);
    analyze_file(fixture.path(), workers(2)).unwrap().stats
}

#[test]
fn single_info_request() {
    // Act
    let stats = analyze(&["2024-01-01T00:00:00Z|INFO|r1|127.0.0.1|GET|/home|200|15|ok"]);

    // Assert
    assert_eq!(stats.total_lines, 1);
    assert_eq!(stats.status_code_counts, BTreeMap::from([(200, 1)]));
    assert_eq!(
        stats.http_method_counts,
        BTreeMap::from([("GET".to_string(), 1)])
    );
    assert_eq!(stats.error_count, 0);
    assert_eq!(stats.warning_count, 0);
    assert_eq!(stats.average_response_time_ms(), Some(15.0));
}

#[test]
fn one_error_one_warning() {
    // Act
    let stats = analyze(&[
        "2024-01-01T00:00:00Z|ERROR|r1|10.0.0.1|POST|/api/orders|500|1200|Database connection timeout",
        "2024-01-01T00:00:01Z|WARN|r2|10.0.0.2|GET|/api/users/3|404|300|Resource not found",
    ]);

    // Assert
    assert_eq!(stats.error_count, 1);
    assert_eq!(stats.warning_count, 1);
    assert_eq!(stats.status_code_counts, BTreeMap::from([(404, 1), (500, 1)]));
    assert_eq!(stats.average_response_time_ms(), Some(750.0));
}

#[test]
fn eight_field_line_is_ignored() {
    // Act
    let stats = analyze(&[
        "2024-01-01T00:00:00Z|INFO|r1|127.0.0.1|GET|/home|200|15|ok",
        "2024-01-01T00:00:01Z|INFO|r2|127.0.0.1|GET|/home|200|15",
    ]);

    // Assert
    assert_eq!(stats.total_lines, 1);
}

#[test]
fn non_numeric_status_is_ignored_entirely() {
    // Act
    let stats = analyze(&["2024-01-01T00:00:00Z|ERROR|r1|127.0.0.1|POST|/home|abc|15|ok"]);

    // Assert
    assert_eq!(stats, LogStats::new());
}

#[test]
fn empty_lines_are_neutral() {
    // Act
    let with_blanks = analyze(&[
        "",
        "t|INFO|a|ip|GET|/|200|10|ok",
        "",
        "",
        "t|WARN|b|ip|GET|/|404|20|missing",
        "",
    ]);
    let without = analyze(&[
        "t|INFO|a|ip|GET|/|200|10|ok",
        "t|WARN|b|ip|GET|/|404|20|missing",
    ]);

    // Assert
    assert_eq!(with_blanks, without);
}

#[test]
fn missing_file_fails_the_run() {
    // Arrange
    let fixture = LogFixture::from_lines(&[]);
    let missing = fixture.path().with_file_name("gone.log");

    // Act
    let result = analyze_file(&missing, workers(4));

    // Assert
    assert!(matches!(result, Err(AnalyzeError::Open { .. })));
}

#[test]
fn unreadable_chunk_aborts_the_whole_run() {
    // Arrange
    // A directory opens and reports a size, but reading it fails inside the workers.
    let fixture = LogFixture::from_lines(&["t|INFO|a|ip|GET|/|200|10|ok"]);
    let dir = fixture.path().parent().unwrap();
    let dir_size = std::fs::metadata(dir).unwrap().len();
    assert!(dir_size > 0, "directory must report a non-zero size");

    // Act
    let result = analyze_file(dir, workers(3));

    // Assert
    let Err(err) = result else {
        panic!("expected the run to fail instead of merging partial results");
    };
    assert!(
        matches!(err, AnalyzeError::Chunk { .. }),
        "unexpected error: {err}"
    );
    assert!(err.to_string().contains("failed to read"), "{err}");
}
