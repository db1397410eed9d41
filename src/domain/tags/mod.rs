//! Tag system

pub mod aggregate;

pub use aggregate::{validate_tag, TagCounts};
