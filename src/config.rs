use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::colours::DEFAULT_COLOUR_FILE;
use crate::error::{KitError, Result};
use crate::smoothing::DEFAULT_WINDOW_SIZE;
use crate::stop::DEFAULT_STOP_FILE;

/// Defaults used by the experiment-kit binary, persisted as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    /// File whose appearance asks a running job to stop
    pub stop_file: PathBuf,

    /// XKCD colour definitions
    pub colour_file: PathBuf,

    /// Points averaged by the moving-average smoother
    pub moving_average_window: usize,

    /// Base name for run log files
    pub log_prefix: String,
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            stop_file: PathBuf::from(DEFAULT_STOP_FILE),
            colour_file: PathBuf::from(DEFAULT_COLOUR_FILE),
            moving_average_window: DEFAULT_WINDOW_SIZE,
            log_prefix: "run".to_string(),
        }
    }
}

impl KitConfig {
    /// Path of `config.json` in the platform config directory
    pub fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "experiment-kit").map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the platform config directory, or return defaults
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    /// Load from `config_path`, or return defaults if it doesn't exist or is corrupted
    pub fn load_from(config_path: &Path) -> Self {
        info!("Loading config from: {:?}", config_path);

        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str::<KitConfig>(&contents) {
                Ok(config) => return config,
                Err(e) => warn!("Failed to parse config file: {}. Using defaults.", e),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file found. Using defaults.");
            }
            Err(e) => warn!("Failed to read config file: {}. Using defaults.", e),
        }

        Self::default()
    }

    /// Write to `config_path`, creating its directory if needed
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| KitError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| KitError::Config(e.to_string()))?;
        fs::write(config_path, json).map_err(|e| KitError::io(config_path, e))?;

        info!("Config saved to: {:?}", config_path);
        Ok(())
    }
}
