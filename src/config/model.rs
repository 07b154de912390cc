//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::form::controller::DEFAULT_RESET_DELAY;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// How long the confirmation stays up before the form resets.
    #[serde(default = "default_reset_delay_ms")]
    pub reset_delay_ms: u64,
}

impl FormConfig {
    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_reset_delay_ms(),
        }
    }
}

fn default_reset_delay_ms() -> u64 {
    DEFAULT_RESET_DELAY.as_millis() as u64
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_club_name")]
    pub club_name: String,
    /// Year shown in the footer; the current year when unset.
    #[serde(default)]
    pub footer_year: Option<i32>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            club_name: default_club_name(),
            footer_year: None,
        }
    }
}

fn default_club_name() -> String {
    "Football Team Subscription".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_dir() -> String {
    "~/.local/share/clubsignup/logs".into()
}

fn default_level() -> String {
    "info".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.form.reset_delay(), Duration::from_millis(3000));
        assert_eq!(cfg.ui.club_name, "Football Team Subscription");
        assert_eq!(cfg.ui.footer_year, None);
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [form]
            reset_delay_ms = 500

            [logging]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(cfg.form.reset_delay(), Duration::from_millis(500));
        assert!(!cfg.logging.enabled);
        assert_eq!(cfg.logging.log_dir, "~/.local/share/clubsignup/logs");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.ui.footer_year = Some(2025);
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.ui.footer_year, Some(2025));
        assert_eq!(back.form.reset_delay_ms, cfg.form.reset_delay_ms);
    }
}
