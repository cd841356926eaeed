use crate::config::TimesheetConfig;
use anyhow::{Context, Result};
use tracing_appender::rolling::Rotation;
use tracing_subscriber::EnvFilter;

const LOG_PREFIX: &str = "timesheet-tui";

/// Install the global subscriber. The terminal belongs to the UI, so events go
/// to a daily-rolling file instead of stdout.
pub fn init(config: &TimesheetConfig) -> Result<()> {
    let log_dir = TimesheetConfig::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::Builder::new()
        .rotation(Rotation::DAILY)
        .max_log_files(5)
        .filename_prefix(LOG_PREFIX)
        .build(&log_dir)
        .context("Failed to create log file appender")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            config.log_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(())
}
