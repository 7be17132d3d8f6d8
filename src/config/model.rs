//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML.
//! Every field has a sensible default so the application works without a file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the quote text is drawn. The terminal stand-in for a font choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Plain,
    #[default]
    Bold,
    Italic,
}

/// Appearance settings applied at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial dark-mode state. Toggling in the app does not write back.
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub emphasis: Emphasis,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            emphasis: Emphasis::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }
}

/// Timings of the quote fade and the confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    #[serde(default = "default_confirmation_ms")]
    pub confirmation_ms: u64,
    #[serde(default = "default_fade_ms")]
    pub fade_ms: u64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            confirmation_ms: default_confirmation_ms(),
            fade_ms: default_fade_ms(),
        }
    }
}

impl BehaviorConfig {
    pub fn confirmation_ttl(&self) -> Duration {
        Duration::from_millis(self.confirmation_ms)
    }

    pub fn fade_phase(&self) -> Duration {
        Duration::from_millis(self.fade_ms)
    }
}

/// Source of the online quotes screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_remote_url")]
    pub url: String,
    #[serde(default = "default_remote_limit")]
    pub limit: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            url: default_remote_url(),
            limit: default_remote_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}
fn default_confirmation_ms() -> u64 {
    2000
}
fn default_fade_ms() -> u64 {
    250
}
fn default_remote_url() -> String {
    "https://zenquotes.io/api/quotes".to_string()
}
fn default_remote_limit() -> usize {
    10
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_log_dir() -> String {
    "~/.local/share/dailyquote/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(!config.ui.dark_mode);
        assert_eq!(config.ui.emphasis, Emphasis::Bold);
        assert_eq!(config.behavior.confirmation_ttl(), Duration::from_secs(2));
        assert_eq!(config.behavior.fade_phase(), Duration::from_millis(250));
        assert_eq!(config.remote.url, "https://zenquotes.io/api/quotes");
        assert_eq!(config.remote.limit, 10);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [ui]
            emphasis = "italic"

            [behavior]
            confirmation_ms = 500

            [remote]
            limit = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.emphasis, Emphasis::Italic);
        assert_eq!(config.ui.tick_ms, 50);
        assert_eq!(config.behavior.confirmation_ms, 500);
        assert_eq!(config.behavior.fade_ms, 250);
        assert_eq!(config.remote.limit, 3);
        assert_eq!(config.remote.timeout_secs, 10);
    }

    #[test]
    fn test_unknown_emphasis_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[ui]\nemphasis = \"comic\"");
        assert!(result.is_err());
    }
}
