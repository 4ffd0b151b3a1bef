use crate::record::types::{FIELD_DELIMITER, Record};
use std::num::ParseIntError;
use thiserror::Error;

/// Why a line was turned away. Callers of [`parse_record`] never see this;
/// it only exists so rejected lines can be traced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("expected 9 fields, found {found}")]
    FieldCount { found: usize },

    #[error("invalid {field}: {source}")]
    Numeric {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

/// Parse one line (terminator already stripped) into a [`Record`].
///
/// Malformed lines yield `None`; the reason is deliberately not surfaced.
pub fn parse_record(line: &str) -> Option<Record> {
    try_parse_record(line).ok()
}

pub fn try_parse_record(line: &str) -> Result<Record, Rejection> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let [
        timestamp,
        log_level,
        request_id,
        source_ip,
        http_method,
        endpoint,
        status_code,
        response_time_ms,
        message,
    ] = fields.as_slice()
    else {
        return Err(Rejection::FieldCount {
            found: fields.len(),
        });
    };

    Ok(Record {
        timestamp: timestamp.to_string(),
        log_level: log_level.to_string(),
        request_id: request_id.to_string(),
        source_ip: source_ip.to_string(),
        http_method: http_method.to_string(),
        endpoint: endpoint.to_string(),
        status_code: parse_int("status code", status_code)?,
        response_time_ms: parse_int("response time", response_time_ms)?,
        message: message.to_string(),
    })
}

fn parse_int(field: &'static str, raw: &str) -> Result<i32, Rejection> {
    raw.parse::<i32>()
        .map_err(|source| Rejection::Numeric { field, source })
}
