//! Shared test setup for application services

use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use std::fs;
use tempfile::TempDir;

/// Initialized blog in a temp directory with author "Jane"
pub fn blog() -> (TempDir, FileSystemRepository) {
    let temp = TempDir::new().unwrap();
    let repo = FileSystemRepository::new(temp.path().to_path_buf());
    repo.initialize().unwrap();
    repo.save_config(&Config::new("Field Notes", "Jane")).unwrap();
    (temp, repo)
}

/// Write `content/<name>.md` with the given frontmatter fields and body
pub fn write_post(repo: &FileSystemRepository, name: &str, frontmatter: &str, body: &str) {
    let path = repo.content_dir().join(format!("{}.md", name));
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("+++\n{}\n+++\n{}", frontmatter, body)).unwrap();
}
