//! Diagnostic logging to disk.
//!
//! The terminal belongs to the form, so `tracing` output goes to a daily log
//! file named `clubsignup_<date>.log` in the configured log directory
//! (default: `~/.local/share/clubsignup/logs/`). Accepted submissions show up
//! there as `subscription` events.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

/// Path of today's log file.
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    expand_home(&config.log_dir).join(format!("clubsignup_{}.log", date))
}

pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| anyhow!("Invalid log level '{}'", level))
}

/// Install the global subscriber. No-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let level = parse_level(&config.level)?;
    let path = log_file_path(config);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "Logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_level(" DEBUG ").unwrap(), Level::DEBUG);
        assert!(parse_level("loud").is_err());
    }

    #[test]
    fn test_log_file_is_dated() {
        let cfg = LoggingConfig {
            log_dir: "/tmp/clubsignup-logs".into(),
            ..LoggingConfig::default()
        };
        let path = log_file_path(&cfg);
        assert!(path.starts_with("/tmp/clubsignup-logs"));
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("clubsignup_"));
        assert!(name.ends_with(".log"));
    }

    #[test]
    fn test_disabled_logging_does_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            level: "not-a-level".into(),
            ..LoggingConfig::default()
        };
        assert!(init(&cfg).is_ok());
    }
}
