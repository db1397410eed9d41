//! Domain layer - Business logic and domain models

pub mod format;
pub mod page;
pub mod post;
pub mod reading_time;
pub mod scroll;
pub mod tags;
pub mod theme;

pub use page::Layout;
pub use post::Post;
pub use reading_time::ReadingTime;
pub use tags::TagCounts;
pub use theme::Theme;
