use serde::{Deserialize, Serialize};

/// How the final report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contents of `logtally.hcl`. Every setting is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Number of chunk workers. Unset means "detect".
    #[serde(default)]
    pub workers: Option<usize>,

    #[serde(default)]
    pub output: OutputFormat,
}
