//! Blog post model and frontmatter parsing

use super::tags::validate_tag;
use crate::error::{FolioError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Delimiter line around the TOML frontmatter block
const FRONTMATTER_FENCE: &str = "+++";

/// Slugs taken by the pages the site build writes itself
pub const RESERVED_SLUGS: &[&str] = &["tags", "index.html", "favicon.svg"];

/// A single blog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub date: NaiveDate,
    pub author: String,
    pub published: bool,
    pub body: String,
}

impl Post {
    /// Create a published post with no tags, description or body
    pub fn new(slug: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Post {
            slug: slug.into(),
            title: title.into(),
            description: None,
            tags: Vec::new(),
            date,
            author: String::new(),
            published: true,
            body: String::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    /// Check whether the post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parse a post file: a `+++` TOML frontmatter block followed by the body.
    ///
    /// `default_slug` is used when the frontmatter has no `slug`, and
    /// `default_author` when it has no `author`. `path` is only used for
    /// error messages.
    pub fn parse(
        source: &str,
        default_slug: &str,
        default_author: &str,
        path: &Path,
    ) -> Result<Self> {
        let frontmatter_error = |message: String| FolioError::Frontmatter {
            path: path.to_path_buf(),
            message,
        };

        let (raw, body) = split_frontmatter(source).ok_or_else(|| {
            frontmatter_error(format!(
                "expected a '{}' delimited TOML block at the top of the file",
                FRONTMATTER_FENCE
            ))
        })?;

        let fm: Frontmatter = toml::from_str(raw).map_err(|e| frontmatter_error(e.to_string()))?;

        let slug = fm.slug.unwrap_or_else(|| default_slug.to_string());
        validate_slug(&slug).map_err(frontmatter_error)?;

        let date = date_from_value(&fm.date).ok_or_else(|| {
            frontmatter_error(format!("invalid date '{}', expected YYYY-MM-DD", fm.date))
        })?;

        let mut tags = Vec::new();
        for (index, value) in fm.tags.unwrap_or_default().into_iter().enumerate() {
            match value {
                toml::Value::String(tag) => {
                    validate_tag(&tag, &slug)?;
                    tags.push(tag);
                }
                other => {
                    return Err(FolioError::InvalidInput(format!(
                        "tag #{} of post '{}' is not a string (found {})",
                        index + 1,
                        slug,
                        other.type_str()
                    )));
                }
            }
        }

        Ok(Post {
            slug,
            title: fm.title,
            description: fm.description.filter(|d| !d.trim().is_empty()),
            tags,
            date,
            author: fm.author.unwrap_or_else(|| default_author.to_string()),
            published: fm.published,
            body: body.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct Frontmatter {
    title: String,
    description: Option<String>,
    date: toml::Value,
    author: Option<String>,
    #[serde(default = "default_published")]
    published: bool,
    tags: Option<Vec<toml::Value>>,
    slug: Option<String>,
}

fn default_published() -> bool {
    true
}

/// A slug becomes a path under the build output directory, so it must stay
/// relative and inside it, and must not land on a page the build owns.
fn validate_slug(slug: &str) -> std::result::Result<(), String> {
    if slug.trim().is_empty() {
        return Err("slug must not be empty".to_string());
    }
    if slug.starts_with('/') || slug.contains('\\') {
        return Err(format!(
            "slug '{}' must be a relative path separated by '/'",
            slug
        ));
    }
    for segment in slug.split('/') {
        if segment.trim().is_empty() || segment == "." || segment == ".." {
            return Err(format!(
                "slug '{}' contains an empty, '.' or '..' segment",
                slug
            ));
        }
    }
    if RESERVED_SLUGS.contains(&slug) || slug.split('/').any(|s| s == "index.html") {
        return Err(format!(
            "slug '{}' is reserved (reserved: {})",
            slug,
            RESERVED_SLUGS.join(", ")
        ));
    }
    Ok(())
}

/// Accept both `date = "2025-01-17"` and the TOML date literal `date = 2025-01-17`
fn date_from_value(value: &toml::Value) -> Option<NaiveDate> {
    match value {
        toml::Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok(),
        toml::Value::Datetime(dt) => {
            let date = dt.date?;
            NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
        }
        _ => None,
    }
}

/// Split `source` into (frontmatter, body). Returns None when the file does
/// not open with a fence or the block is never closed.
fn split_frontmatter(source: &str) -> Option<(&str, &str)> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let rest = source.strip_prefix(FRONTMATTER_FENCE)?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_FENCE {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
