use clap::{Parser, Subcommand};
use logtally_core::cli::{AnalyzeArgs, GenerateArgs, analyze, generate};
use logtally_core::logging::{LogFormat, default_log_format, init_logging};
use owo_colors::OwoColorize;

#[derive(Parser, Debug)]
#[command(
    name = "logtally",
    version,
    about = "logtally: parallel request-log statistics"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute traffic and reliability statistics for a log file
    Analyze(AnalyzeArgs),

    /// Write a synthetic log file for benchmarking
    Generate(GenerateArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Command::Analyze(args) => analyze(args),
        Command::Generate(args) => generate(args),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("{} {e:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
