//! Configuration handling
//!
//! Configuration is stored in `config.toml` under the platform config
//! directory (e.g. `~/.config/checklist/config.toml`). A missing file
//! means defaults; an unparseable file is an error with context.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Could not determine a data directory for this platform")]
    NoDataDir,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Override for the data directory holding tasks.json / lists.json
    pub data_dir: Option<PathBuf>,

    /// Whether `task list` shows completed tasks by default
    pub show_completed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            show_completed: true,
        }
    }
}

impl Config {
    /// Loads the global config, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(path) => path,
            // Headless platforms without a config dir just get defaults
            Err(_) => return Ok(Self::default()),
        };

        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Saves the config to the global config path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;

        Ok(())
    }

    /// Returns the path to the global config file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "checklist").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Resolves the data directory: explicit flag, then config override,
    /// then the platform data dir.
    pub fn resolve_data_dir(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = flag {
            return Ok(dir);
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let dirs = ProjectDirs::from("", "", "checklist").ok_or(ConfigError::NoDataDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}
