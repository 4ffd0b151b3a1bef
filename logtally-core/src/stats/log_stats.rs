use crate::record::{LEVEL_ERROR, LEVEL_WARN, Record};
use serde::Serialize;
use std::collections::BTreeMap;

/// Running statistics for one chunk, or for the whole file once merged.
///
/// A chunk worker owns its `LogStats` exclusively while scanning and hands
/// it over by value; merging never needs a lock.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub total_lines: u64,
    pub error_count: u64,
    pub warning_count: u64,

    /// Exact sum; 128 bits cannot overflow for any realistic file.
    pub total_response_time_ms: i128,

    pub status_code_counts: BTreeMap<i32, u64>,
    pub http_method_counts: BTreeMap<String, u64>,
}

impl LogStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one accepted record into the counters.
    pub fn record(&mut self, record: &Record) {
        self.total_lines += 1;
        self.total_response_time_ms += i128::from(record.response_time_ms);

        *self.status_code_counts.entry(record.status_code).or_insert(0) += 1;

        // Avoid allocating a key for methods we've already seen.
        match self.http_method_counts.get_mut(record.http_method.as_str()) {
            Some(count) => *count += 1,
            None => {
                self.http_method_counts
                    .insert(record.http_method.clone(), 1);
            }
        }

        if record.log_level == LEVEL_ERROR {
            self.error_count += 1;
        } else if record.log_level == LEVEL_WARN {
            self.warning_count += 1;
        }
    }

    /// Key-wise addition of `other` into `self`.
    pub fn merge(&mut self, other: &LogStats) {
        self.total_lines += other.total_lines;
        self.error_count += other.error_count;
        self.warning_count += other.warning_count;
        self.total_response_time_ms += other.total_response_time_ms;

        for (status, count) in &other.status_code_counts {
            *self.status_code_counts.entry(*status).or_insert(0) += count;
        }
        for (method, count) in &other.http_method_counts {
            *self.http_method_counts.entry(method.clone()).or_insert(0) += count;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_lines == 0
    }

    /// Percentage of accepted lines logged at `ERROR`.
    pub fn error_rate(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.error_count as f64 / self.total_lines as f64 * 100.0)
    }

    pub fn average_response_time_ms(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        Some(self.total_response_time_ms as f64 / self.total_lines as f64)
    }
}

/// Reduce any number of per-chunk stats into one. Order does not matter.
pub fn merge_all<'a, I>(parts: I) -> LogStats
where
    I: IntoIterator<Item = &'a LogStats>,
{
    parts.into_iter().fold(LogStats::new(), |mut acc, part| {
        acc.merge(part);
        acc
    })
}
