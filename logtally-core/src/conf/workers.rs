use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::num::NonZeroUsize;
use std::thread;

pub const WORKERS_ENV: &str = "LOGTALLY_WORKERS";

/// Used when the platform cannot report its parallelism.
pub const FALLBACK_WORKERS: NonZeroUsize = NonZeroUsize::new(4).unwrap();

/// Pick the worker count: CLI flag, then `LOGTALLY_WORKERS`, then the config
/// file, then detected parallelism.
pub fn resolve_workers(
    cli: Option<NonZeroUsize>,
    cfg: &AnalyzerConfig,
) -> Result<NonZeroUsize, ConfigError> {
    let env = std::env::var(WORKERS_ENV).ok();
    let detected = thread::available_parallelism().ok();
    resolve_workers_from(cli, env.as_deref(), cfg, detected)
}

pub fn resolve_workers_from(
    cli: Option<NonZeroUsize>,
    env: Option<&str>,
    cfg: &AnalyzerConfig,
    detected: Option<NonZeroUsize>,
) -> Result<NonZeroUsize, ConfigError> {
    if let Some(n) = cli {
        return Ok(n);
    }

    if let Some(raw) = env {
        return raw
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| ConfigError::InvalidWorkers {
                origin: WORKERS_ENV,
                value: raw.to_string(),
            });
    }

    if let Some(n) = cfg.workers {
        return NonZeroUsize::new(n).ok_or_else(|| ConfigError::InvalidWorkers {
            origin: "config file",
            value: n.to_string(),
        });
    }

    Ok(detected.unwrap_or(FALLBACK_WORKERS))
}
