use crate::scan::{Analysis, ChunkRange, ChunkReport};
use crate::stats::LogStats;
use serde::Serialize;

#[derive(Serialize)]
struct ChunkJson {
    range: ChunkRange,
    lines_read: u64,
    empty_lines: u64,
    rejected_lines: u64,
    accepted_lines: u64,
}

impl From<&ChunkReport> for ChunkJson {
    fn from(chunk: &ChunkReport) -> Self {
        Self {
            range: chunk.range,
            lines_read: chunk.lines_read,
            empty_lines: chunk.empty_lines,
            rejected_lines: chunk.rejected_lines,
            accepted_lines: chunk.stats.total_lines,
        }
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    path: String,
    file_size: u64,
    workers: usize,
    elapsed_ms: f64,
    error_rate: Option<f64>,
    average_response_time_ms: Option<f64>,
    #[serde(flatten)]
    stats: &'a LogStats,
    chunks: Vec<ChunkJson>,
}

pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    let stats = &analysis.stats;
    let report = ReportJson {
        path: analysis.path.display().to_string(),
        file_size: analysis.file_size,
        workers: analysis.workers.get(),
        elapsed_ms: analysis.elapsed.as_secs_f64() * 1000.0,
        error_rate: stats.error_rate(),
        average_response_time_ms: stats.average_response_time_ms(),
        stats,
        chunks: analysis.chunks.iter().map(ChunkJson::from).collect(),
    };

    serde_json::to_string_pretty(&report)
}
