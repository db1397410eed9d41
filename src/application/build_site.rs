//! Static site build use case

use super::list_posts::visible_posts;
use crate::domain::{Layout, Post, ReadingTime, TagCounts};
use crate::error::Result;
use crate::infrastructure::{BlogRepository, Config, FileSystemRepository};
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the blog root
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Summary of a finished build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub posts: usize,
    pub tags: usize,
    pub pages: usize,
}

/// Service for rendering the blog to static HTML
pub struct BuildSiteService {
    repository: FileSystemRepository,
}

impl BuildSiteService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    fn layout(config: &Config) -> Layout {
        Layout {
            site_title: config.title.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            email: config.email.clone(),
            base_path: config.base_path.clone(),
            home_url: config.home_url.clone(),
            social_links: config
                .social
                .iter()
                .map(|(label, url)| (label.clone(), url.clone()))
                .collect(),
            theme: config.theme,
            year: Local::now().year(),
        }
    }

    /// Render the index, one page per published post, and the tag index.
    ///
    /// Relative `out_dir` paths are resolved against the blog root.
    pub fn execute(&self, out_dir: Option<&Path>) -> Result<BuildReport> {
        let config = self.repository.load_config()?;
        let out_dir = match out_dir {
            Some(dir) if dir.is_absolute() => dir.to_path_buf(),
            Some(dir) => self.repository.root().join(dir),
            None => self.repository.root().join(DEFAULT_OUTPUT_DIR),
        };

        let posts = visible_posts(self.repository.load_posts(&config)?, false);
        let counts = TagCounts::aggregate(&posts)?;
        let layout = Self::layout(&config);
        let mut pages = 0;

        let refs: Vec<&Post> = posts.iter().collect();
        FileSystemRepository::write_output(
            &out_dir,
            "index.html",
            &layout.render_index(&refs).into_string(),
        )?;
        pages += 1;

        for post in &posts {
            let reading_time = ReadingTime::estimate(&post.body, config.words_per_minute);
            let rel = format!("{}/index.html", post.slug);
            FileSystemRepository::write_output(
                &out_dir,
                &rel,
                &layout.render_post(post, reading_time).into_string(),
            )?;
            log::debug!("rendered {}", rel);
            pages += 1;
        }

        FileSystemRepository::write_output(
            &out_dir,
            "tags/index.html",
            &layout.render_tags(&counts).into_string(),
        )?;
        pages += 1;

        log::info!("built {} pages into {}", pages, out_dir.display());
        Ok(BuildReport {
            out_dir,
            posts: posts.len(),
            tags: counts.len(),
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fixtures::{blog, write_post};
    use std::fs;

    #[test]
    fn test_build_writes_pages() {
        let (temp, repo) = blog();
        write_post(
            &repo,
            "hello",
            "title = \"Hello\"\ndate = \"2025-01-17\"\ntags = [\"rust\", \"web\"]",
            "# Hi\n",
        );
        write_post(
            &repo,
            "series/two",
            "title = \"Two\"\ndate = \"2025-01-18\"\ntags = [\"rust\"]",
            "",
        );
        write_post(
            &repo,
            "draft",
            "title = \"Draft\"\ndate = \"2025-01-19\"\npublished = false\ntags = [\"secret\"]",
            "",
        );

        let report = BuildSiteService::new(repo).execute(None).unwrap();
        let out = temp.path().join("public");
        assert_eq!(report.out_dir, out);
        assert_eq!(report.posts, 2);
        assert_eq!(report.tags, 2);
        assert_eq!(report.pages, 4);

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.find("Two").unwrap() < index.find("Hello").unwrap());
        assert!(!index.contains("Draft"));

        let post = fs::read_to_string(out.join("hello/index.html")).unwrap();
        assert!(post.contains("<h1>Hi</h1>"));
        assert!(post.contains("1 min read"));
        assert!(out.join("series/two/index.html").exists());
        assert!(!out.join("draft").exists());

        let tags = fs::read_to_string(out.join("tags/index.html")).unwrap();
        assert!(tags.contains("rust (2)"));
        assert!(tags.contains("web (1)"));
        assert!(!tags.contains("secret"));
    }

    #[test]
    fn test_build_custom_relative_out_dir() {
        let (temp, repo) = blog();
        let report = BuildSiteService::new(repo)
            .execute(Some(Path::new("site")))
            .unwrap();
        assert_eq!(report.out_dir, temp.path().join("site"));
        assert_eq!(report.pages, 2);
        assert!(temp.path().join("site/index.html").exists());
        assert!(temp.path().join("site/tags/index.html").exists());
    }

    #[test]
    fn test_build_rejects_escaping_slug_before_writing() {
        let (temp, repo) = blog();
        write_post(
            &repo,
            "hello",
            "title = \"Hello\"\ndate = \"2025-01-17\"\nslug = \"../escaped\"",
            "",
        );

        let err = BuildSiteService::new(repo).execute(None).unwrap_err();
        assert!(matches!(err, crate::error::FolioError::Frontmatter { .. }));
        assert!(!temp.path().join("escaped/index.html").exists());
        assert!(!temp.path().join("public").exists());
    }

    #[test]
    fn test_build_rejects_reserved_slug() {
        for slug in ["tags", "index.html", "favicon.svg"] {
            let (temp, repo) = blog();
            write_post(
                &repo,
                "post",
                &format!("title = \"Post\"\ndate = \"2025-01-17\"\nslug = \"{}\"", slug),
                "",
            );

            let err = BuildSiteService::new(repo).execute(None).unwrap_err();
            assert!(matches!(err, crate::error::FolioError::Frontmatter { .. }));
            assert!(!temp.path().join("public").exists());
        }
    }
}
