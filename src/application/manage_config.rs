//! Config management use case

use crate::domain::Theme;
use crate::error::{FolioError, Result};
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::str::FromStr;

const VALID_KEYS: &str =
    "title, description, author, email, base_path, home_url, words_per_minute, theme";

/// Service for managing blog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "title" => Ok(config.title),
            "description" => Ok(config.description),
            "author" => Ok(config.author),
            "email" => Ok(config.email),
            "base_path" => Ok(config.base_path),
            "home_url" => Ok(config.home_url),
            "words_per_minute" => Ok(config.words_per_minute.to_string()),
            "theme" => Ok(config.theme.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "title" => config.title = value.to_string(),
            "description" => config.description = value.to_string(),
            "author" => config.author = value.to_string(),
            "email" => config.email = value.to_string(),
            "base_path" => config.base_path = value.trim_end_matches('/').to_string(),
            "home_url" => config.home_url = value.to_string(),
            "words_per_minute" => {
                config.words_per_minute = value.parse().map_err(|_| {
                    FolioError::Config(format!(
                        "Invalid words_per_minute: '{}'. Expected a positive integer",
                        value
                    ))
                })?;
            }
            "theme" => {
                config.theme = Theme::from_str(value).map_err(FolioError::Config)?;
            }
            _ => return Err(unknown_key(key)),
        }

        config.validate()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// Get all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> FolioError {
    FolioError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
