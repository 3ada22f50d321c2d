//! Configuration management

use crate::domain::SortMode;
use crate::error::{DiscshelfError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sort mode used by `list` when `--sort` is not given
    #[serde(default)]
    pub default_sort: SortMode,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            default_sort: SortMode::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .discshelf/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".discshelf").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiscshelfError::NotLibraryDirectory(path.to_path_buf())
            } else {
                DiscshelfError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiscshelfError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .discshelf/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let discshelf_dir = path.join(".discshelf");
        let config_path = discshelf_dir.join("config.toml");

        if !discshelf_dir.exists() {
            fs::create_dir(&discshelf_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DiscshelfError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
