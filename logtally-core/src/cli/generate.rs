use crate::generate::{GenerateOptions, generate_log_file, lines_for_size_mb};
use anyhow::{Context, Result};
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output file (truncated if it exists)
    pub file: PathBuf,

    /// Number of lines to write
    #[arg(long, conflicts_with = "size_mb", default_value_t = 100_000)]
    pub lines: u64,

    /// Approximate target size in megabytes instead of a line count
    #[arg(long)]
    pub size_mb: Option<u64>,

    /// Producer threads (defaults to detected parallelism)
    #[arg(long)]
    pub producers: Option<NonZeroUsize>,

    /// Seed for reproducible content
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn generate(args: GenerateArgs) -> Result<()> {
    let lines = args.size_mb.map(lines_for_size_mb).unwrap_or(args.lines);

    let mut opts = GenerateOptions::new(lines);
    if let Some(producers) = args.producers {
        opts.producers = producers;
    }
    opts.seed = args.seed;

    let summary = generate_log_file(&args.file, &opts)
        .with_context(|| format!("failed to generate {}", args.file.display()))?;

    println!(
        "Generated {} lines ({} bytes) in {:.2} seconds -> {}",
        summary.lines,
        summary.bytes,
        summary.elapsed.as_secs_f64(),
        args.file.display()
    );

    Ok(())
}
