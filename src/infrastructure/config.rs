//! Configuration management

use crate::domain::reading_time::DEFAULT_WORDS_PER_MINUTE;
use crate::domain::Theme;
use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Name of the marker directory holding blog metadata
pub const FOLIO_DIR: &str = ".folio";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
    /// URL prefix the site is served under, e.g. "/blog"
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_home_url")]
    pub home_url: String,
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub email: String,
    /// Footer links, label -> URL
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

fn default_base_path() -> String {
    "/blog".to_string()
}

fn default_home_url() -> String {
    "/".to_string()
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

impl Config {
    /// Create a new config with default values
    pub fn new(title: &str, author: &str) -> Self {
        Config {
            title: title.to_string(),
            description: String::new(),
            author: author.to_string(),
            base_path: default_base_path(),
            home_url: default_home_url(),
            words_per_minute: default_words_per_minute(),
            theme: Theme::default(),
            email: String::new(),
            social: BTreeMap::new(),
        }
    }

    /// Load config from .folio/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(FOLIO_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::NotBlogDirectory(path.to_path_buf())
            } else {
                FolioError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| FolioError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to .folio/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let folio_dir = path.join(FOLIO_DIR);
        let config_path = folio_dir.join(CONFIG_FILE);

        if !folio_dir.exists() {
            fs::create_dir(&folio_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.words_per_minute == 0 {
            return Err(FolioError::Config(
                "words_per_minute must be greater than zero".to_string(),
            ));
        }
        if !self.base_path.is_empty() && !self.base_path.starts_with('/') {
            return Err(FolioError::Config(format!(
                "base_path must start with '/': '{}'",
                self.base_path
            )));
        }
        Ok(())
    }
}
