use crate::scan::plan::ChunkRange;
use std::path::PathBuf;
use thiserror::Error;

/// I/O failure inside a single chunk worker.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to seek to byte {offset}: {source}")]
    Seek {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read near byte {offset}: {source}")]
    Read {
        offset: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a whole analysis run. Any chunk failure aborts the run;
/// partial results are never merged.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("could not open file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not determine size of {path}: {source}")]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk {index} {range} failed: {source}")]
    Chunk {
        index: usize,
        range: ChunkRange,
        #[source]
        source: ScanError,
    },

    #[error("failed to spawn worker for chunk {index}: {source}")]
    Spawn {
        index: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("chunk {index} {range} worker panicked")]
    WorkerPanicked { index: usize, range: ChunkRange },
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn metadata(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }
}
