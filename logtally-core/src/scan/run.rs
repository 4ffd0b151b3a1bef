use crate::scan::error::AnalyzeError;
use crate::scan::plan::{ChunkRange, plan_chunks};
use crate::scan::worker::{ChunkReport, scan_chunk};
use crate::stats::{LogStats, merge_all};
use std::fs::File;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

/// Everything a finished run produced: the merged stats plus run metadata.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub path: PathBuf,
    pub file_size: u64,
    pub workers: NonZeroUsize,
    pub chunks: Vec<ChunkReport>,
    pub stats: LogStats,
    pub elapsed: Duration,
}

/// Size the file, scan it with `workers` concurrent chunk workers and merge
/// their results.
pub fn analyze_file(path: &Path, workers: NonZeroUsize) -> Result<Analysis, AnalyzeError> {
    let file_size = File::open(path)
        .map_err(|e| AnalyzeError::open(path, e))?
        .metadata()
        .map_err(|e| AnalyzeError::metadata(path, e))?
        .len();

    if file_size < workers.get() as u64 {
        tracing::warn!(
            file_size,
            workers = workers.get(),
            "more workers than bytes; some chunks will be empty"
        );
    }

    tracing::info!(
        path = %path.display(),
        file_size,
        workers = workers.get(),
        "starting analysis"
    );

    let started = Instant::now();
    let ranges = plan_chunks(file_size, workers);
    let chunks = scan_all(path, &ranges)?;
    let stats = merge_all(chunks.iter().map(|chunk| &chunk.stats));
    let elapsed = started.elapsed();

    tracing::info!(
        elapsed_ms = elapsed.as_millis() as u64,
        total_lines = stats.total_lines,
        "analysis complete"
    );

    Ok(Analysis {
        path: path.to_path_buf(),
        file_size,
        workers,
        chunks,
        stats,
        elapsed,
    })
}

/// One thread per range. The scope is the barrier: nothing is merged until
/// every worker has returned.
fn scan_all(path: &Path, ranges: &[ChunkRange]) -> Result<Vec<ChunkReport>, AnalyzeError> {
    let joined = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(ranges.len());
        for (index, &range) in ranges.iter().enumerate() {
            let spawned = thread::Builder::new()
                .name(format!("chunk-{index}"))
                .spawn_scoped(scope, move || scan_chunk(path, range));

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    // Workers already running still finish before the scope exits.
                    for handle in handles {
                        let _ = handle.join();
                    }
                    return Err(AnalyzeError::Spawn { index, source });
                }
            }
        }

        Ok(handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>())
    })?;

    let mut reports = Vec::with_capacity(joined.len());
    for (index, (range, result)) in ranges.iter().copied().zip(joined).enumerate() {
        let report = result
            .map_err(|_| AnalyzeError::WorkerPanicked { index, range })?
            .map_err(|source| AnalyzeError::Chunk {
                index,
                range,
                source,
            })?;

        tracing::debug!(
            chunk = index,
            range = %range,
            lines_read = report.lines_read,
            empty = report.empty_lines,
            rejected = report.rejected_lines,
            accepted = report.stats.total_lines,
            "chunk scanned"
        );

        reports.push(report);
    }

    Ok(reports)
}
