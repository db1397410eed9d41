//! Initialize blog use case

use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Service for creating a new blog
pub struct InitService;

impl InitService {
    /// Initialize a new blog at the specified path.
    pub fn execute(path: &Path, title: &str, author: &str) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        let repo = FileSystemRepository::new(path.to_path_buf());
        repo.initialize()?;

        let config = Config::new(title, author);
        repo.save_config(&config)?;

        log::info!("initialized blog at {}", path.display());
        println!("Initialized folio blog at {}", path.display());
        println!("Write posts under {}", repo.content_dir().display());

        Ok(())
    }
}
