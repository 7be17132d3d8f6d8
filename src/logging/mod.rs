//! Diagnostic logging to disk.
//!
//! The terminal belongs to the TUI, so tracing output only ever goes to a
//! daily file named `dailyquote_<date>.log` in the configured log directory
//! (default: `~/.local/share/dailyquote/logs/`). Logging is off unless the
//! config enables it or `DAILYQUOTE_LOG` is set; that variable also takes
//! precedence over the configured level.

use crate::config::LoggingConfig;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "DAILYQUOTE_LOG";

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    match log_dir.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(log_dir),
        },
        None => PathBuf::from(log_dir),
    }
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    log_dir.join(format!("dailyquote_{}.log", date))
}

/// Install the file subscriber. Returns the log file path when logging is on.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let env_filter = std::env::var(LOG_ENV).ok();
    if !config.enabled && env_filter.is_none() {
        return None;
    }

    let filter = env_filter
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(&config.level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let log_dir = expand_log_dir(&config.log_dir);
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory {}: {}", log_dir.display(), e);
        return None;
    }
    let path = log_file_path(&log_dir);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_log_dir() {
        assert_eq!(expand_log_dir("/var/log/dq"), PathBuf::from("/var/log/dq"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_log_file_name() {
        let path = log_file_path(Path::new("/tmp/dq"));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("dailyquote_"));
        assert!(name.ends_with(".log"));
        assert_eq!(path.parent(), Some(Path::new("/tmp/dq")));
    }
}
