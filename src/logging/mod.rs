//! Diagnostic logging to disk.
//!
//! The terminal is owned by the UI, so `tracing` output goes to a daily file
//! named `shill_<date>.log` in the configured log directory (default:
//! `~/.local/share/shill-your-coin/logs/`). `RUST_LOG` overrides the level.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(())
}

fn log_file_name(date: NaiveDate) -> String {
    format!("shill_{}.log", date.format("%Y-%m-%d"))
}

// Expand ~ in log_dir
fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(dir),
        },
        None => PathBuf::from(dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "shill_2024-03-09.log");
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/shill"), PathBuf::from("/var/log/shill"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_is_noop() {
        let config = LoggingConfig {
            enabled: false,
            log_dir: "/nonexistent/should/not/be/created".into(),
            level: "debug".into(),
        };
        assert!(init(&config).is_ok());
        assert!(!std::path::Path::new("/nonexistent/should/not/be/created").exists());
    }
}
