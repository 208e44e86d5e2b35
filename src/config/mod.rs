use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_work_duration;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overrides the config file location (useful for tests).
pub const CONFIG_ENV: &str = "RPRESENCE_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_min_work_duration")]
    pub min_work_duration: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub show_weekday: bool,
}

fn default_data_file() -> String {
    Config::config_dir()
        .join("rpresence.json")
        .to_string_lossy()
        .to_string()
}
fn default_min_work_duration() -> String {
    "8h".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            min_work_duration: default_min_work_duration(),
            separator_char: default_separator_char(),
            show_weekday: false,
        }
    }
}

impl Config {
    /// Standard configuration directory for the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpresence")
    }

    /// Full path of the config file, honouring `RPRESENCE_CONFIG`
    pub fn config_file() -> PathBuf {
        match env::var(CONFIG_ENV) {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => Self::config_dir().join("rpresence.conf"),
        }
    }

    /// Load configuration from the default location, or defaults if missing
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Daily target in milliseconds, from `min_work_duration`
    pub fn target_ms(&self) -> AppResult<i64> {
        parse_work_duration(&self.min_work_duration)
    }

    /// Write a default config file. Existing files are left untouched
    /// unless `force` is set. Returns whether the file was written.
    pub fn init(path: &Path, force: bool) -> AppResult<bool> {
        if path.exists() && !force {
            info!(path = %path.display(), "config file already present");
            return Ok(false);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;

        info!(path = %path.display(), "config file written");
        Ok(true)
    }
}
