//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily log file named
//! `eisaku_<date>.log` in the configured log directory (default:
//! `~/.local/share/eisaku/logs/`). The terminal itself is never logged to
//! while the UI owns it. `RUST_LOG` overrides the configured level.

use crate::config::expand_home;
use crate::config::model::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// File the subscriber writes to for today's date.
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    expand_home(&config.log_dir).join(format!("eisaku_{}.log", date))
}

/// Install the global subscriber. No-op if logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path(config);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            log_dir: "/nonexistent/should/not/be/created".into(),
            level: "debug".into(),
        };
        init(&config).unwrap();
        assert!(!PathBuf::from("/nonexistent/should/not/be/created").exists());
    }

    #[test]
    fn test_log_file_name() {
        let config = LoggingConfig {
            enabled: true,
            log_dir: "/tmp/eisaku-logs".into(),
            level: "info".into(),
        };
        let path = log_file_path(&config);
        assert!(path.starts_with("/tmp/eisaku-logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("eisaku_"));
        assert!(name.ends_with(".log"));
    }
}
