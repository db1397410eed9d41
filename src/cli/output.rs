//! Output formatting utilities

use crate::application::PostDetails;
use crate::domain::format::iso_date;
use crate::domain::{Post, TagCounts};

/// Format a list of posts for display
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        let draft = if post.published { "" } else { " [draft]" };
        output.push_str(&format!(
            "{}  {}  {}{}\n",
            iso_date(post.date),
            post.slug,
            post.title,
            draft
        ));
    }
    output
}

/// Format tag counts for display, most used first.
pub fn format_tag_counts(counts: &TagCounts) -> String {
    if counts.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in counts.ranked() {
        output.push_str(&format!("#{} ({})\n", tag, count));
    }

    output
}

/// Format a single post's metadata
pub fn format_post_details(details: &PostDetails) -> String {
    let post = &details.post;
    let mut output = format!("{}\n", post.title);
    if let Some(description) = &post.description {
        output.push_str(&format!("{}\n", description));
    }
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("Tags: {}\n", tags.join(" ")));
    }
    if !post.author.is_empty() {
        output.push_str(&format!("Author: {}\n", post.author));
    }
    output.push_str(&format!("Published: {}\n", details.formatted_date));
    output.push_str(&format!("Reading time: {}\n", details.reading_time));
    output
}
