//! Error types for folio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Not a folio directory: {0}")]
    NotBlogDirectory(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Duplicate slug '{slug}' in {first} and {second}")]
    DuplicateSlug {
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Invalid frontmatter in {path}: {message}")]
    Frontmatter { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::NotBlogDirectory(_) => 2,
            FolioError::PostNotFound(_) => 3,
            FolioError::InvalidInput(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::NotBlogDirectory(path) => {
                format!(
                    "Not a folio directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' in this directory to create a new blog\n\
                    • Navigate to an existing blog directory\n\
                    • Set FOLIO_ROOT environment variable to your blog path",
                    path.display()
                )
            }
            FolioError::PostNotFound(slug) => {
                format!(
                    "No published post with slug: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'folio posts' to see available slugs\n\
                    • Drafts are hidden: check 'published' in the post frontmatter\n\
                    • Use 'folio posts --all' to include drafts",
                    slug
                )
            }
            FolioError::InvalidInput(msg) => {
                format!(
                    "Invalid input: {}\n\n\
                    Tags must be non-empty strings, e.g.:\n\
                    tags = [\"rust\", \"web\"]",
                    msg
                )
            }
            FolioError::Frontmatter { path, message } => {
                format!(
                    "Invalid frontmatter in {}: {}\n\n\
                    Posts must start with a TOML block:\n\
                    +++\n\
                    title = \"Hello\"\n\
                    date = \"2025-01-17\"\n\
                    +++",
                    path.display(),
                    message
                )
            }
            FolioError::Config(msg) => {
                if msg.contains("Invalid theme") {
                    format!(
                        "{}\n\n\
                        Valid themes: dark, light\n\
                        Example: folio theme light",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
