use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::TaskloopError;

pub const HOME_ENV: &str = "TASKLOOP_HOME";
pub const LATENCY_ENV: &str = "TASKLOOP_REMOTE_LATENCY_MS";

const DEFAULT_DIR: &str = ".taskloop";
const DEFAULT_REMOTE_LATENCY_MS: u64 = 3000;

/// Settings stored in `<data dir>/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub remote_latency_ms: u64,
    pub seed_remote: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote_latency_ms: DEFAULT_REMOTE_LATENCY_MS,
            seed_remote: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub settings: Settings,
}

impl Config {
    /// Resolve the data directory and read its settings, applying environment overrides.
    pub fn load() -> Result<Self, TaskloopError> {
        let data_dir = resolve_data_dir()?;
        let mut settings = read_settings(&data_dir.join("config.json"))?;

        if let Ok(raw) = env::var(LATENCY_ENV) {
            settings.remote_latency_ms = raw.trim().parse().map_err(|_| {
                TaskloopError::config(format!("{LATENCY_ENV} must be a number of milliseconds, got '{raw}'"))
            })?;
            debug!(latency_ms = settings.remote_latency_ms, "remote latency overridden from environment");
        }

        Ok(Self { data_dir, settings })
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("tasks.db")
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.json")
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join("state.json")
    }

    /// Backing file for the simulated remote service.
    pub fn remote_path(&self) -> PathBuf {
        self.data_dir.join("remote.json")
    }

    pub fn remote_latency(&self) -> Duration {
        Duration::from_millis(self.settings.remote_latency_ms)
    }

    /// Write `config.json` unless one already exists.
    pub fn write_if_missing(&self) -> Result<(), TaskloopError> {
        let path = self.config_path();
        if path.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.data_dir).map_err(|e| TaskloopError::config(e.to_string()))?;
        let body = serde_json::to_string_pretty(&Settings::default())?;
        fs::write(&path, body).map_err(|e| TaskloopError::config(e.to_string()))?;
        info!(path = %path.display(), "wrote default config");
        Ok(())
    }
}

fn resolve_data_dir() -> Result<PathBuf, TaskloopError> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    let cwd = env::current_dir().map_err(|e| TaskloopError::config(e.to_string()))?;
    Ok(cwd.join(DEFAULT_DIR))
}

fn read_settings(path: &Path) -> Result<Settings, TaskloopError> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let raw = fs::read_to_string(path).map_err(|e| TaskloopError::config(e.to_string()))?;
    serde_json::from_str(&raw)
        .map_err(|e| TaskloopError::config(format!("Invalid {}: {e}", path.display())))
}
