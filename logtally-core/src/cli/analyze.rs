use crate::conf::{OutputFormat, load_optional_config, resolve_workers};
use crate::report::{render_json, render_report};
use crate::scan::analyze_file;
use anyhow::{Context, Result, bail};
use clap::Args;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Log file to analyze
    pub file: PathBuf,

    /// Number of chunk workers (defaults to detected parallelism)
    #[arg(short, long)]
    pub workers: Option<NonZeroUsize>,

    /// Path to an HCL config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn analyze(args: AnalyzeArgs) -> Result<()> {
    if !args.file.is_file() {
        bail!("Could not open file {}", args.file.display());
    }

    let cfg = load_optional_config(args.config.as_deref())?;
    let workers = resolve_workers(args.workers, &cfg)?;
    let output = if args.json {
        OutputFormat::Json
    } else {
        cfg.output
    };

    let analysis = analyze_file(&args.file, workers)
        .with_context(|| format!("analysis of {} failed", args.file.display()))?;

    match output {
        OutputFormat::Text => print!("{}", render_report(&analysis)),
        OutputFormat::Json => println!("{}", render_json(&analysis)?),
    }

    Ok(())
}
