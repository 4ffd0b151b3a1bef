//! Chunked scanning pipeline
//!
//! A file of known size is cut into byte ranges, one per worker. Each worker
//! seeks to its range, reads the lines that *start* inside it and folds the
//! accepted records into a private [`LogStats`](crate::stats::LogStats).
//! Once every worker has finished, the per-chunk stats are merged.
//!
//! file size + workers
//! plan_chunks
//! ChunkRange
//! scan_chunk (one thread each)
//! ChunkReport
//! merge_all
//! Analysis

mod error;
mod plan;
mod run;
mod worker;

#[cfg(test)]
mod tests;

pub use error::*;
pub use plan::*;
pub use run::*;
pub use worker::*;
