mod error;
mod loader;
mod types;
mod workers;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, load_optional_config};
pub use types::*;
pub use workers::*;
