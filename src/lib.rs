//! folio - Personal blog content tool
//!
//! Loads markdown posts with TOML frontmatter, aggregates their tags, formats
//! post metadata, and renders the blog to static HTML pages.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::FolioError;
