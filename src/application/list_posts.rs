//! List posts use case

use crate::domain::Post;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// Which posts to list
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    /// Include posts with `published = false`
    pub include_drafts: bool,
    /// Only posts carrying this tag (exact match)
    pub tag: Option<String>,
    pub limit: Option<usize>,
}

/// Keep published posts, or all of them when `include_drafts` is set
pub fn visible_posts(posts: Vec<Post>, include_drafts: bool) -> Vec<Post> {
    posts
        .into_iter()
        .filter(|post| include_drafts || post.published)
        .collect()
}

/// Service for listing posts, newest first
pub struct ListPostsService {
    repository: FileSystemRepository,
}

impl ListPostsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    pub fn execute(&self, filter: &PostFilter) -> Result<Vec<Post>> {
        let config = self.repository.load_config()?;
        let posts = self.repository.load_posts(&config)?;

        let mut posts = visible_posts(posts, filter.include_drafts);
        if let Some(tag) = &filter.tag {
            posts.retain(|post| post.has_tag(tag));
        }
        if let Some(n) = filter.limit {
            posts.truncate(n);
        }

        Ok(posts)
    }
}
