//! Tag aggregation: per-tag occurrence counts and count-ordered listings

use crate::domain::Post;
use crate::error::{FolioError, Result};
use std::collections::BTreeMap;

/// Reject tags the presentation layer cannot render
pub fn validate_tag(tag: &str, slug: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(FolioError::InvalidInput(format!(
            "post '{}' has an empty tag",
            slug
        )));
    }
    Ok(())
}

/// Mapping from tag name to the number of times it occurs across posts.
///
/// Keys are kept in lexical order, which is also the tie-break order used by
/// [`TagCounts::sort_by_count`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagCounts {
    counts: BTreeMap<String, usize>,
}

impl TagCounts {
    /// Count every (post, tag) pair.
    ///
    /// A tag repeated within one post is counted once per occurrence. Posts
    /// without tags contribute nothing. Fails with `InvalidInput` on the first
    /// empty tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use folio::domain::{Post, TagCounts};
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    /// let posts = vec![
    ///     Post::new("a", "A", date).with_tags(["go", "rust"]),
    ///     Post::new("b", "B", date).with_tags(["go"]),
    ///     Post::new("c", "C", date),
    /// ];
    ///
    /// let counts = TagCounts::aggregate(&posts).unwrap();
    /// assert_eq!(counts.get("go"), 2);
    /// assert_eq!(counts.sort_by_count(), vec!["go", "rust"]);
    /// ```
    pub fn aggregate<'a, I>(posts: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Post>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        for post in posts {
            for tag in &post.tags {
                validate_tag(tag, &post.slug)?;
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }

        Ok(TagCounts { counts })
    }

    /// Tag names ordered by descending count, ties in lexical ascending order
    pub fn sort_by_count(&self) -> Vec<String> {
        let mut entries: Vec<(&String, &usize)> = self.counts.iter().collect();
        // Stable sort over lexically ordered entries keeps ties lexical.
        entries.sort_by(|a, b| b.1.cmp(a.1));
        entries.into_iter().map(|(tag, _)| tag.clone()).collect()
    }

    /// Count for `tag`, zero when the tag never occurs
    pub fn get(&self, tag: &str) -> usize {
        self.counts.get(tag).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of (post, tag) pairs
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate (tag, count) in lexical tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(tag, count)| (tag.as_str(), *count))
    }

    /// (tag, count) pairs in [`TagCounts::sort_by_count`] order
    pub fn ranked(&self) -> Vec<(String, usize)> {
        self.sort_by_count()
            .into_iter()
            .map(|tag| {
                let count = self.get(&tag);
                (tag, count)
            })
            .collect()
    }
}
