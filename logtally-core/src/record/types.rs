/// One accepted log line, bound to its nine fields.
///
/// Only `log_level`, `http_method`, `status_code` and `response_time_ms`
/// feed the statistics; the rest are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub timestamp: String,
    pub log_level: String,
    pub request_id: String,
    pub source_ip: String,
    pub http_method: String,
    pub endpoint: String,
    pub status_code: i32,
    pub response_time_ms: i32,
    pub message: String,
}

pub const FIELD_DELIMITER: char = '|';

pub const LEVEL_ERROR: &str = "ERROR";
pub const LEVEL_WARN: &str = "WARN";
