//! Config management use case

use crate::domain::SortMode;
use crate::error::{DiscshelfError, Result};
use crate::infrastructure::{Config, Library, LibraryRepository};
use std::str::FromStr;

/// Service for managing library configuration
pub struct ConfigService {
    repository: LibraryRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: LibraryRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "default_sort" => Ok(config.default_sort.as_str().to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(DiscshelfError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: default_sort, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "default_sort" => {
                let sort = SortMode::from_str(value).map_err(DiscshelfError::Config)?;
                config.default_sort = sort;
            }
            "created" => {
                return Err(DiscshelfError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(DiscshelfError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: default_sort",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
