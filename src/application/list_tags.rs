//! List tags use case

use super::list_posts::visible_posts;
use crate::domain::TagCounts;
use crate::error::Result;
use crate::infrastructure::{BlogRepository, FileSystemRepository};

/// Service for counting tags across posts.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Aggregate tags over published posts (drafts too with `include_drafts`).
    pub fn execute(&self, include_drafts: bool) -> Result<TagCounts> {
        let config = self.repository.load_config()?;
        let posts = visible_posts(self.repository.load_posts(&config)?, include_drafts);
        TagCounts::aggregate(&posts)
    }
}
