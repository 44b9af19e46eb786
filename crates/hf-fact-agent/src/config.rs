//! Fact agent configuration, loadable from TOML.

use serde::Deserialize;

/// Top-level configuration for the fact agent.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    /// Host snapshot JSON produced by the collection layer.
    pub snapshot_path: String,
    /// Log output format on stderr.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Report rendering options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Plain,
}

/// How the fact report is written to stdout.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON report.
    #[serde(default = "default_true")]
    pub pretty: bool,
    /// Include the per-category evidence trail.
    #[serde(default = "default_true")]
    pub include_evidence: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_evidence: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
