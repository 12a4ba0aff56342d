// Logging setup.
// The TUI owns the terminal, so events go to a log file instead of stdout.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{DevfolioError, Result};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV: &str = "DEVFOLIO_LOG";

/// Build the filter from `DEVFOLIO_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)
            .map_err(|e| DevfolioError::Config(format!("{}: {}", LOG_ENV, e))),
        _ => EnvFilter::try_new(format!("devfolio={}", default_level))
            .map_err(|e| DevfolioError::Config(format!("log_level: {}", e))),
    }
}

/// Install a file-backed subscriber appending to `path`.
pub fn setup_file_logging(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter(default_level)?)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| DevfolioError::Config(format!("logging already initialized: {}", e)))?;

    Ok(())
}
