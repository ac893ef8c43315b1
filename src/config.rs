//! Configuration types for options-form

use crate::telemetry::LogFormat;
use serde::Deserialize;
use std::time::Duration;

/// Default backend endpoint path
pub const DEFAULT_PRICING_PATH: &str = "/api/options-pricing";

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
    pub telemetry: TelemetryConfig,
}

/// Pricing backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Scheme and authority of the backend, e.g. `http://127.0.0.1:5000`
    pub base_url: String,

    /// Endpoint path appended to `base_url`
    #[serde(default = "default_path")]
    pub path: String,

    /// Request timeout in seconds. Absent means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_path() -> String {
    DEFAULT_PRICING_PATH.to_string()
}

impl ApiConfig {
    /// Full endpoint URL
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Form controller configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControllerConfig {
    /// Which submit behavior `FormController::submit` runs
    #[serde(default)]
    pub variant: SubmitVariant,
}

/// Submit behavior: fixed placeholder text or a remote pricing call
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmitVariant {
    Placeholder,
    #[default]
    Remote,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
