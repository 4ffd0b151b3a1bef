use crate::record::try_parse_record;
use crate::scan::error::ScanError;
use crate::scan::plan::ChunkRange;
use crate::stats::LogStats;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::Path;

const READ_BUFFER_BYTES: usize = 256 * 1024;

/// Outcome of scanning one chunk.
///
/// Only `stats` takes part in the merge; the line counters are
/// diagnostics for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkReport {
    pub range: ChunkRange,
    pub stats: LogStats,
    pub lines_read: u64,
    pub empty_lines: u64,
    pub rejected_lines: u64,
}

impl ChunkReport {
    fn new(range: ChunkRange) -> Self {
        Self {
            range,
            stats: LogStats::new(),
            lines_read: 0,
            empty_lines: 0,
            rejected_lines: 0,
        }
    }
}

/// Scan the lines of `path` owned by `range` on a private file handle.
pub fn scan_chunk(path: &Path, range: ChunkRange) -> Result<ChunkReport, ScanError> {
    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    scan_reader(BufReader::with_capacity(READ_BUFFER_BYTES, file), range)
}

/// Scan every line whose first byte lies in `[range.start, range.end)`.
///
/// A line that starts inside the range is read to its end even when it
/// runs past `range.end`. A line that starts before the range belongs to
/// the previous chunk and is skipped.
pub fn scan_reader<R>(mut reader: R, range: ChunkRange) -> Result<ChunkReport, ScanError>
where
    R: BufRead + Seek,
{
    let mut report = ChunkReport::new(range);
    if range.is_empty() {
        return Ok(report);
    }

    let mut buf = Vec::with_capacity(512);
    let mut pos = seek_to_first_line(&mut reader, range.start, &mut buf)?;

    while pos < range.end {
        buf.clear();
        let line_start = pos;
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| ScanError::Read {
                offset: line_start,
                source,
            })?;
        if n == 0 {
            break;
        }
        pos += n as u64;
        report.lines_read += 1;

        let line = strip_terminator(&buf);
        if line.is_empty() {
            report.empty_lines += 1;
            continue;
        }

        let text = String::from_utf8_lossy(line);
        match try_parse_record(&text) {
            Ok(record) => report.stats.record(&record),
            Err(reason) => {
                report.rejected_lines += 1;
                tracing::trace!(offset = line_start, %reason, "rejected line");
            }
        }
    }

    Ok(report)
}

/// Position `reader` at the first line that starts at or after `start` and
/// return that byte offset.
///
/// Seeking one byte early means a line starting exactly at `start` is kept:
/// the byte before it is its predecessor's terminator, and that is all that
/// gets discarded.
fn seek_to_first_line<R>(
    reader: &mut R,
    start: u64,
    scratch: &mut Vec<u8>,
) -> Result<u64, ScanError>
where
    R: BufRead + Seek,
{
    let offset = start.saturating_sub(1);
    reader
        .seek(SeekFrom::Start(offset))
        .map_err(|source| ScanError::Seek { offset, source })?;

    if start == 0 {
        return Ok(0);
    }

    scratch.clear();
    let skipped = reader
        .read_until(b'\n', scratch)
        .map_err(|source| ScanError::Read { offset, source })?;

    Ok(offset + skipped as u64)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
