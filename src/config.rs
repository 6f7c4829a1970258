use std::path::{Path, PathBuf};

use dioxus::logger::tracing::debug;
use serde::{Deserialize, Serialize};

use crate::demo::progress::clamp_step;
use crate::navigation::ScrollBehavior;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not get config directory!")]
    CouldNotGetConfigDir,
    #[error("Could not read config file {0}! {1}")]
    CouldNotReadFile(String, String),
    #[error("Could not deserialize config! {0}")]
    CouldNotDeserialize(String),
}

pub const DEFAULT_PROGRESS_TICK_MS: u32 = 200;
pub const DEFAULT_PROGRESS_STEP: u8 = 5;

#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Config {
    pub scroll_behavior: ScrollBehavior,
    pub progress_tick_ms: u32,
    pub progress_step: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scroll_behavior: ScrollBehavior::Top,
            progress_tick_ms: DEFAULT_PROGRESS_TICK_MS,
            progress_step: DEFAULT_PROGRESS_STEP,
        }
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    let dir = match dirs::config_local_dir() {
        Some(dir) => dir,
        None => return Err(ConfigError::CouldNotGetConfigDir),
    };
    Ok(dir.join("chartkit-demo"))
}

fn get_config_file_path() -> Result<PathBuf, ConfigError> {
    let dir = get_config_dir()?;
    Ok(dir.join("config.json"))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config and clamps out of range values.
    pub fn from_json(serialized: &str) -> Result<Config, ConfigError> {
        match serde_json::from_str::<Config>(serialized) {
            Ok(config) => Ok(config.sanitized()),
            Err(err) => Err(ConfigError::CouldNotDeserialize(err.to_string())),
        }
    }

    pub fn sanitized(mut self) -> Self {
        self.progress_step = clamp_step(self.progress_step);
        self.progress_tick_ms = self.progress_tick_ms.max(1);
        self
    }

    /// Reads the config file from the local config directory, defaults when there is none yet.
    pub fn read_config() -> Result<Config, ConfigError> {
        Config::read_from(&get_config_file_path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            debug!("No config at {}, using defaults.", path.display());
            return Ok(Config::default());
        }

        let serialized = std::fs::read_to_string(path).map_err(|err| {
            ConfigError::CouldNotReadFile(path.display().to_string(), err.to_string())
        })?;
        debug!("Read {} bytes of config file.", serialized.len());
        Config::from_json(&serialized)
    }
}
