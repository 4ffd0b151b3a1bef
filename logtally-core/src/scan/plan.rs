use serde::Serialize;
use std::fmt;
use std::num::NonZeroUsize;

/// Half-open byte interval `[start, end)` of the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkRange {
    pub start: u64,
    pub end: u64,
}

impl ChunkRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "chunk range must not be inverted");
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for ChunkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Split `file_size` bytes into `workers` contiguous ranges.
///
/// Every range but the last is `file_size / workers` bytes long; the last
/// one absorbs the remainder. With more workers than bytes the leading
/// ranges are empty, which is fine: they scan nothing.
pub fn plan_chunks(file_size: u64, workers: NonZeroUsize) -> Vec<ChunkRange> {
    let count = workers.get() as u64;
    let chunk_size = file_size / count;

    (0..count)
        .map(|i| {
            let start = i * chunk_size;
            let end = if i == count - 1 {
                file_size
            } else {
                (i + 1) * chunk_size
            };
            ChunkRange::new(start, end)
        })
        .collect()
}
