use crate::generate::constants::{
    ENDPOINTS, ERROR_MESSAGES, HTTP_METHODS, LOG_LEVELS, OK_MESSAGE, status_codes_for,
};
use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt::Write;
use std::net::Ipv4Addr;

/// Builds realistic `|`-delimited request lines.
pub struct LineGenerator {
    rng: StdRng,
    start: DateTime<Utc>,
}

impl LineGenerator {
    pub fn new(rng: StdRng, start: DateTime<Utc>) -> Self {
        Self { rng, start }
    }

    pub fn seeded(seed: u64, start: DateTime<Utc>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), start)
    }

    /// Append line number `index` (with its newline) to `out`.
    pub fn write_line(&mut self, index: u64, out: &mut String) {
        let timestamp = (self.start + TimeDelta::milliseconds(index as i64))
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let request_id = uuid::Builder::from_random_bytes(self.rng.random()).into_uuid();
        let source_ip = Ipv4Addr::new(
            self.rng.random_range(1..=223),
            self.rng.random(),
            self.rng.random(),
            self.rng.random_range(1..=254),
        );

        let method = self.pick(HTTP_METHODS);
        let mut endpoint = self.pick(ENDPOINTS).to_string();
        if endpoint.contains("users") || endpoint.contains("orders") {
            let id: u32 = self.rng.random_range(1..=1000);
            let _ = write!(endpoint, "/{id}");
        }

        let status = self.pick(status_codes_for(method));
        let (level, message) = match status {
            500.. => ("ERROR", self.pick(ERROR_MESSAGES)),
            400.. => ("WARN", self.pick(ERROR_MESSAGES)),
            _ => (self.pick_level(), OK_MESSAGE),
        };

        let response_time_ms: u32 = if status < 500 {
            self.rng.random_range(20..=500)
        } else {
            self.rng.random_range(500..=2000)
        };

        let _ = writeln!(
            out,
            "{timestamp}|{level}|{request_id}|{source_ip}|{method}|{endpoint}|{status}|{response_time_ms}|{message}"
        );
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[self.rng.random_range(0..items.len())]
    }

    fn pick_level(&mut self) -> &'static str {
        let mut roll = self.rng.random_range(0..100u32);
        for &(level, weight) in LOG_LEVELS {
            if roll < weight {
                return level;
            }
            roll -= weight;
        }
        LOG_LEVELS[0].0
    }
}
