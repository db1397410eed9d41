//! File system repository

use crate::domain::Post;
use crate::error::{FolioError, Result};
use crate::infrastructure::config::FOLIO_DIR;
use crate::infrastructure::Config;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory (relative to the blog root) that holds post sources
pub const CONTENT_DIR: &str = "content";

/// File extensions recognized as posts
const POST_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// Abstract repository for blog operations
pub trait BlogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .folio/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .folio/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .folio directory exists
    fn is_initialized(&self) -> bool;

    /// Create .folio and content directories
    fn initialize(&self) -> Result<()>;

    /// Load every post under the content directory, drafts included.
    ///
    /// Posts come back newest first; equal dates are ordered by slug.
    fn load_posts(&self, config: &Config) -> Result<Vec<Post>>;
}

/// File system implementation of BlogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover blog root by walking up from current directory
    /// First checks FOLIO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FOLIO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_folio_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "FOLIO_ROOT is set to '{}' but no .folio directory found. \
                    Run 'folio init' in that directory or unset FOLIO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover blog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_folio_dir(&current) {
                log::debug!("found blog root at {}", current.display());
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FolioError::NotBlogDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_folio_dir(path: &Path) -> bool {
        path.join(FOLIO_DIR).is_dir()
    }

    pub fn content_dir(&self) -> PathBuf {
        self.root.join(CONTENT_DIR)
    }

    fn is_post_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| POST_EXTENSIONS.contains(&ext))
    }

    /// Slug from a path relative to the content directory:
    /// `notes/hello.mdx` -> `notes/hello`
    fn slug_from_relative_path(rel: &Path) -> Option<String> {
        let without_ext = rel.with_extension("");
        let parts: Vec<&str> = without_ext
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }

    /// Write a generated file below `out_dir`, creating parent directories
    pub fn write_output(out_dir: &Path, rel: &str, content: &str) -> Result<()> {
        let path = out_dir.join(rel);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, content).map_err(FolioError::Io)
    }
}

impl BlogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_folio_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let folio_dir = self.root.join(FOLIO_DIR);

        if folio_dir.exists() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&folio_dir)?;
        fs::create_dir_all(self.content_dir())?;
        Ok(())
    }

    fn load_posts(&self, config: &Config) -> Result<Vec<Post>> {
        let content_dir = self.content_dir();
        if !content_dir.is_dir() {
            log::warn!("content directory {} is missing", content_dir.display());
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if entry.depth() == 0 || !entry.file_type().is_dir() {
                    return true;
                }
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.'))
            });

        let mut posts = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in walker {
            let entry = entry.map_err(|e| FolioError::Io(e.into()))?;
            if !entry.file_type().is_file() || !Self::is_post_file(entry.path()) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&content_dir) else {
                continue;
            };
            let Some(default_slug) = Self::slug_from_relative_path(rel) else {
                log::warn!("skipping non UTF-8 path {}", entry.path().display());
                continue;
            };

            let source = fs::read_to_string(entry.path())?;
            let post = Post::parse(&source, &default_slug, &config.author, entry.path())?;
            log::debug!("loaded post '{}' from {}", post.slug, rel.display());

            if let Some(first) = seen.get(&post.slug) {
                return Err(FolioError::DuplicateSlug {
                    slug: post.slug,
                    first: first.clone(),
                    second: entry.path().to_path_buf(),
                });
            }
            seen.insert(post.slug.clone(), entry.path().to_path_buf());
            posts.push(post);
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
        log::info!("loaded {} posts", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_repo() -> (TempDir, FileSystemRepository, Config) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        let config = Config::new("Blog", "Jane");
        repo.save_config(&config).unwrap();
        (temp, repo, config)
    }

    fn write_post(repo: &FileSystemRepository, rel: &str, content: &str) {
        let path = repo.content_dir().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_initialize_creates_dirs() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".folio").is_dir());
        assert!(temp.path().join("content").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".folio")).unwrap();

        let subdir = temp.path().join("content").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_when_no_folio_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            FolioError::NotBlogDirectory(_) => {}
            other => panic!("Expected NotBlogDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp, repo, config) = initialized_repo();
        assert_eq!(repo.load_config().unwrap(), config);
    }

    #[test]
    fn test_load_posts_empty() {
        let (_temp, repo, config) = initialized_repo();
        assert!(repo.load_posts(&config).unwrap().is_empty());
    }

    #[test]
    fn test_load_posts_sorted_newest_first() {
        let (_temp, repo, config) = initialized_repo();
        write_post(
            &repo,
            "older.md",
            "+++\ntitle = \"Older\"\ndate = \"2024-05-01\"\n+++\n",
        );
        write_post(
            &repo,
            "newer.mdx",
            "+++\ntitle = \"Newer\"\ndate = \"2025-01-17\"\n+++\n",
        );
        write_post(
            &repo,
            "also-newer.md",
            "+++\ntitle = \"Same day\"\ndate = \"2025-01-17\"\n+++\n",
        );

        let posts = repo.load_posts(&config).unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["also-newer", "newer", "older"]);
        assert_eq!(posts[0].author, "Jane");
        assert_eq!(posts[2].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_load_posts_nested_slug_and_skips_other_files() {
        let (_temp, repo, config) = initialized_repo();
        write_post(
            &repo,
            "series/part-one.md",
            "+++\ntitle = \"One\"\ndate = \"2025-01-01\"\n+++\n",
        );
        write_post(&repo, "notes.txt", "not a post");
        write_post(
            &repo,
            ".drafts/hidden.md",
            "+++\ntitle = \"Hidden\"\ndate = \"2025-01-01\"\n+++\n",
        );

        let posts = repo.load_posts(&config).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "series/part-one");
    }

    #[test]
    fn test_load_posts_duplicate_slug_fails() {
        let (_temp, repo, config) = initialized_repo();
        write_post(
            &repo,
            "a.md",
            "+++\ntitle = \"A\"\ndate = \"2025-01-01\"\nslug = \"same\"\n+++\n",
        );
        write_post(
            &repo,
            "b.md",
            "+++\ntitle = \"B\"\ndate = \"2025-01-02\"\nslug = \"same\"\n+++\n",
        );

        match repo.load_posts(&config).unwrap_err() {
            FolioError::DuplicateSlug { slug, .. } => assert_eq!(slug, "same"),
            other => panic!("Expected DuplicateSlug, got {:?}", other),
        }
    }

    #[test]
    fn test_load_posts_reports_bad_frontmatter() {
        let (_temp, repo, config) = initialized_repo();
        write_post(&repo, "broken.md", "no frontmatter here");

        match repo.load_posts(&config).unwrap_err() {
            FolioError::Frontmatter { path, .. } => assert!(path.ends_with("broken.md")),
            other => panic!("Expected Frontmatter error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        FileSystemRepository::write_output(temp.path(), "a/b/index.html", "<p>hi</p>").unwrap();
        let written = fs::read_to_string(temp.path().join("a/b/index.html")).unwrap();
        assert_eq!(written, "<p>hi</p>");
    }

    #[test]
    fn test_discover_with_folio_root_env() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("FOLIO_ROOT");

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".folio")).unwrap();

        std::env::set_var("FOLIO_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_folio_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("FOLIO_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("FOLIO_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            FolioError::Config(msg) => assert!(msg.contains("no .folio directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
