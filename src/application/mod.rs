//! Application layer - Use cases and orchestration

pub mod build_site;
#[cfg(test)]
mod fixtures;
pub mod init;
pub mod list_posts;
pub mod list_tags;
pub mod manage_config;
pub mod show_post;
pub mod theme;

pub use build_site::{BuildReport, BuildSiteService};
pub use init::InitService;
pub use list_posts::{ListPostsService, PostFilter};
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use show_post::{PostDetails, ShowPostService};
pub use theme::ThemeService;
