//! Show post use case

use crate::domain::format::format_date;
use crate::domain::{Post, ReadingTime};
use crate::error::{FolioError, Result};
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// A post with its display metadata
#[derive(Debug, Clone)]
pub struct PostDetails {
    pub post: Post,
    pub formatted_date: String,
    pub reading_time: ReadingTime,
}

impl PostDetails {
    pub fn new(post: Post, words_per_minute: u32) -> Self {
        let reading_time = ReadingTime::estimate(&post.body, words_per_minute);
        PostDetails {
            formatted_date: format_date(post.date),
            reading_time,
            post,
        }
    }
}

/// Service for looking up a single published post
pub struct ShowPostService {
    repository: FileSystemRepository,
}

impl ShowPostService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Find the post by slug. Drafts are treated as missing.
    pub fn execute(&self, slug: &str) -> Result<PostDetails> {
        let config = self.repository.load_config()?;
        let slug = slug.trim_matches('/');

        let post = self
            .repository
            .load_posts(&config)?
            .into_iter()
            .find(|post| post.slug == slug)
            .filter(|post| post.published)
            .ok_or_else(|| FolioError::PostNotFound(slug.to_string()))?;

        Ok(PostDetails::new(post, config.words_per_minute))
    }
}
