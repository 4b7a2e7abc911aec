//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub study: StudyConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Study service endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Sent as a bearer token when present.
    #[serde(default)]
    pub auth_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_token: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    /// Category used when none is given on the command line and none was
    /// studied before.
    #[serde(default)]
    pub default_category: Option<String>,
    /// Where other learners' answers can be browsed. `{topic}` is replaced
    /// with the topic id.
    #[serde(default)]
    pub public_answers_url: Option<String>,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Diagnostic log settings. The terminal is owned by the UI, so logs only
/// ever go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_tick_rate_ms() -> u64 {
    1000
}
fn default_log_dir() -> String {
    "~/.local/share/eisaku/logs".to_string()
}
fn default_level() -> String {
    "info".to_string()
}
