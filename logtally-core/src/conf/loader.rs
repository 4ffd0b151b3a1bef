use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::fs;
use std::path::Path;

/// Picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "logtally.hcl";

pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: AnalyzerConfig = hcl::from_str(&raw).map_err(|e| ConfigError::parse(path, e))?;

    if cfg.workers == Some(0) {
        return Err(ConfigError::InvalidWorkers {
            origin: "config file",
            value: "0".to_string(),
        });
    }

    Ok(cfg)
}

/// An explicit path must exist; the default file is optional.
pub fn load_optional_config(explicit: Option<&Path>) -> Result<AnalyzerConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let default = Path::new(DEFAULT_CONFIG_FILE);
    if default.is_file() {
        tracing::debug!(path = DEFAULT_CONFIG_FILE, "using default config file");
        return load_config(default);
    }

    Ok(AnalyzerConfig::default())
}
