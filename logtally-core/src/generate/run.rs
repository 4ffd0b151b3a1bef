use crate::generate::constants::{DEFAULT_BATCH_SIZE, QUEUE_BATCHES};
use crate::generate::error::GenerateError;
use crate::generate::line::LineGenerator;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub lines: u64,
    pub producers: NonZeroUsize,
    pub batch_size: usize,
    /// Fixed seed for reproducible content. Producer `i` uses `seed + i`.
    pub seed: Option<u64>,
    /// Timestamp of line 0; line `n` is `n` milliseconds later.
    pub start: DateTime<Utc>,
}

impl GenerateOptions {
    pub fn new(lines: u64) -> Self {
        Self {
            lines,
            producers: thread::available_parallelism()
                .unwrap_or(crate::conf::FALLBACK_WORKERS),
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            start: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    pub lines: u64,
    pub bytes: u64,
    pub elapsed: Duration,
}

/// Write `opts.lines` synthetic lines to `path`, truncating it first.
///
/// Line order across producers is not deterministic, even with a seed; the
/// multiset of lines is.
pub fn generate_log_file(
    path: &Path,
    opts: &GenerateOptions,
) -> Result<GenerateSummary, GenerateError> {
    let file = File::create(path).map_err(|source| GenerateError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    tracing::info!(
        path = %path.display(),
        lines = opts.lines,
        producers = opts.producers.get(),
        "generating log file"
    );

    let started = Instant::now();
    let batch_size = opts.batch_size.max(1);
    let (tx, rx) = mpsc::sync_channel::<String>(QUEUE_BATCHES);

    let (written, joined) = thread::scope(|scope| {
        let handles: Vec<_> = split_lines(opts.lines, opts.producers)
            .into_iter()
            .enumerate()
            .map(|(index, (first, count))| {
                let tx = tx.clone();
                let mut generator = LineGenerator::new(producer_rng(opts.seed, index), opts.start);
                scope.spawn(move || produce(&mut generator, first, count, batch_size, &tx))
            })
            .collect();

        // Writer sees the channel close once every producer hangs up.
        drop(tx);
        let written = write_batches(&mut writer, rx);

        let joined = handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>();
        (written, joined)
    });

    if let Some(index) = joined.iter().position(Result::is_err) {
        return Err(GenerateError::ProducerPanicked { index });
    }

    let write_err = |source: io::Error| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    let bytes = written.map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    let summary = GenerateSummary {
        lines: opts.lines,
        bytes,
        elapsed: started.elapsed(),
    };

    tracing::info!(
        bytes = summary.bytes,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "log file generated"
    );

    Ok(summary)
}

/// `(first_line_index, line_count)` per producer; the last one takes the
/// remainder.
fn split_lines(lines: u64, producers: NonZeroUsize) -> Vec<(u64, u64)> {
    let count = producers.get() as u64;
    let per_producer = lines / count;

    (0..count)
        .map(|i| {
            let first = i * per_producer;
            let n = if i == count - 1 {
                lines - first
            } else {
                per_producer
            };
            (first, n)
        })
        .collect()
}

fn producer_rng(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_os_rng(),
    }
}

fn produce(
    generator: &mut LineGenerator,
    first: u64,
    count: u64,
    batch_size: usize,
    tx: &SyncSender<String>,
) {
    let mut batch = String::new();
    let mut in_batch = 0;

    for index in first..first + count {
        generator.write_line(index, &mut batch);
        in_batch += 1;

        if in_batch == batch_size {
            // Receiver gone means the writer failed; stop producing.
            if tx.send(std::mem::take(&mut batch)).is_err() {
                return;
            }
            in_batch = 0;
        }
    }

    if !batch.is_empty() {
        let _ = tx.send(batch);
    }
}

fn write_batches<W: Write>(writer: &mut W, rx: Receiver<String>) -> io::Result<u64> {
    let mut bytes = 0;
    for batch in rx {
        writer.write_all(batch.as_bytes())?;
        bytes += batch.len() as u64;
    }
    Ok(bytes)
}
