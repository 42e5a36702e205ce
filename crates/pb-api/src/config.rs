//! API server configuration.

use serde::Deserialize;

/// Top-level API server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    #[serde(default = "default_host")]
    pub host: String,
    /// Listen port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the Q&A catalog CSV. None serves the built-in sample
    /// catalog.
    #[serde(default)]
    pub qa_data_path: Option<String>,
    /// Path to the plot table CSV. None serves the built-in sample
    /// plots.
    #[serde(default)]
    pub plot_data_path: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl ApiConfig {
    /// Load config from environment variables (PLOTBOT_PORT,
    /// PLOTBOT_QA_DATA, PLOTBOT_PLOT_DATA).
    pub fn from_env() -> Self {
        let port = std::env::var("PLOTBOT_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);
        Self {
            port,
            qa_data_path: std::env::var("PLOTBOT_QA_DATA").ok(),
            plot_data_path: std::env::var("PLOTBOT_PLOT_DATA").ok(),
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            qa_data_path: None,
            plot_data_path: None,
        }
    }
}
