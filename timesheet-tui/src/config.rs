use crate::goal::GoalRange;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "timesheet-tui";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// Log filter used when `RUST_LOG` is not set, e.g. "info" or "debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Daily goal the progress view starts with
    #[serde(default)]
    pub goal: GoalRange,

    /// Credentials accepted by `run`. Absent in a fresh config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    pub username: String,
    pub password: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            goal: GoalRange::default(),
            login: None,
        }
    }
}

impl TimesheetConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join(APP_DIR)
            .join("config.toml"))
    }

    pub fn log_dir() -> Result<PathBuf> {
        Ok(dirs::data_local_dir()
            .context("Cannot determine data directory")?
            .join(APP_DIR)
            .join("logs"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)?;
        Ok(())
    }

    /// Path of the config file, writing a default one first if it is missing.
    pub fn ensure_exists() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::default()
                .save_to(&path)
                .with_context(|| format!("Failed to write default config at {}", path.display()))?;
        }
        Ok(path)
    }
}
