//! Console configuration, loadable from TOML and overridable by flags.

use serde::Deserialize;

/// Settings for one console invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Q&A catalog CSV path. None falls back to the built-in sample
    /// catalog.
    #[serde(default)]
    pub qa_data_path: Option<String>,
    /// Plot table CSV path. None falls back to the built-in sample
    /// plots.
    #[serde(default)]
    pub plot_data_path: Option<String>,
    /// Base URL of a running pb-api instance. When set, all lookups go
    /// over HTTP instead of local files.
    #[serde(default)]
    pub remote_url: Option<String>,
    /// HTTP request timeout in seconds (remote mode only).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    5
}

impl ConsoleConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            qa_data_path: None,
            plot_data_path: None,
            remote_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}
