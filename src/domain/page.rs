//! HTML page rendering for the static site
//!
//! Every page shares the same chrome: a header with navigation and the theme
//! toggle, a footer with links and copyright, and a `<main>` slot for content.

use super::format::{format_date, iso_date};
use super::scroll::progress_script;
use super::theme::toggle_script;
use super::{Post, ReadingTime, TagCounts, Theme};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Options, Parser as MdParser};

const SCROLL_PROGRESS_ID: &str = "scroll-progress";
const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Render a markdown post body to HTML
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = MdParser::new_ext(body, options);
    let mut output = String::new();
    md_html::push_html(&mut output, parser);
    output
}

/// Site-wide values shared by every page
#[derive(Debug, Clone)]
pub struct Layout {
    pub site_title: String,
    pub description: String,
    pub author: String,
    pub email: String,
    pub base_path: String,
    pub home_url: String,
    /// (label, url) pairs shown in the footer
    pub social_links: Vec<(String, String)>,
    pub theme: Theme,
    pub year: i32,
}

impl Layout {
    /// Join `path` onto the base path, e.g. "tags" -> "/blog/tags"
    pub fn url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}", base, path)
        }
    }

    fn post_url(&self, post: &Post) -> String {
        self.url(&format!("{}/", post.slug))
    }

    /// Wrap `body` into a complete document
    pub fn page(&self, title: &str, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title {
                        @if !title.is_empty() {
                            (title) " | "
                        }
                        (self.site_title)
                    }
                    @if !self.description.is_empty() {
                        meta name="description" content=(self.description);
                    }
                    link rel="icon" type="image/svg+xml" href=(self.url("favicon.svg"));
                }
                body class=(self.theme.css_class()) {
                    (self.header())
                    main { (body) }
                    (self.footer())
                    script { (PreEscaped(toggle_script(THEME_TOGGLE_ID, self.theme))) }
                }
            }
        }
    }

    fn header(&self) -> Markup {
        html! {
            header {
                nav {
                    ul {
                        li { a href=(self.home_url) { "Home" } }
                        li { a href=(self.url("")) { "Blog" } }
                        li { a href=(self.url("tags/")) { "Tags" } }
                    }
                }
                button id=(THEME_TOGGLE_ID) type="button" class="theme-toggle" {
                    span class="sr-only" { "Toggle theme" }
                }
            }
        }
    }

    fn footer(&self) -> Markup {
        html! {
            footer {
                hr;
                ul {
                    li { a href=(self.home_url) { "Home" } }
                    @for (label, href) in &self.social_links {
                        li { a href=(href) { (label) } }
                    }
                }
                @if !self.email.is_empty() {
                    p {
                        "Need some help? Talk to me through "
                        a href=(format!("mailto:{}", self.email)) { "mail" }
                        "."
                    }
                }
                p { "© " (self.year) " " (self.author) ". All rights reserved." }
            }
        }
    }

    fn tag_badges(&self, tags: &[String]) -> Markup {
        html! {
            @if !tags.is_empty() {
                div class="tags" {
                    @for tag in tags {
                        (self.tag_badge(tag, None))
                    }
                }
            }
        }
    }

    fn tag_badge(&self, tag: &str, count: Option<usize>) -> Markup {
        let anchor = tag_anchor(tag);
        let href = self.url(&format!("tags/#{}", anchor));
        html! {
            @match count {
                Some(n) => {
                    a class="tag" id=(anchor) href=(href) { (tag) " (" (n) ")" }
                },
                None => {
                    a class="tag" href=(href) { (tag) }
                },
            }
        }
    }

    /// Post listing, in the order given
    pub fn render_index(&self, posts: &[&Post]) -> Markup {
        self.page(
            "",
            html! {
                h1 { (self.site_title) }
                @if !self.description.is_empty() {
                    p { (self.description) }
                }
                hr;
                @if posts.is_empty() {
                    p { "Nothing to see here yet" }
                } @else {
                    ul class="posts" {
                        @for post in posts {
                            li {
                                h2 { a href=(self.post_url(post)) { (post.title) } }
                                @if let Some(description) = &post.description {
                                    p { (description) }
                                }
                                time datetime=(iso_date(post.date)) { (format_date(post.date)) }
                                (self.tag_badges(&post.tags))
                            }
                        }
                    }
                }
            },
        )
    }

    /// Single post page with metadata, rendered body and scroll indicator
    pub fn render_post(&self, post: &Post, reading_time: ReadingTime) -> Markup {
        self.page(
            &post.title,
            html! {
                div id=(SCROLL_PROGRESS_ID) class="scroll-progress" style="width: 0%" {}
                article {
                    h1 { (post.title) }
                    @if let Some(description) = &post.description {
                        p class="description" { (description) }
                    }
                    (self.tag_badges(&post.tags))
                    div class="meta" {
                        span class="author" { (post.author) }
                        dl {
                            dt { "Published On" }
                            dd { time datetime=(iso_date(post.date)) { (format_date(post.date)) } }
                        }
                        p class="reading-time" { (reading_time.to_string()) }
                    }
                    hr;
                    (PreEscaped(render_markdown(&post.body)))
                }
                script { (PreEscaped(progress_script(SCROLL_PROGRESS_ID))) }
            },
        )
    }

    /// Tag index with counts, in [`TagCounts::sort_by_count`] order
    pub fn render_tags(&self, counts: &TagCounts) -> Markup {
        self.page(
            "Tags",
            html! {
                h1 { "Tags" }
                p { "Topics I've written about" }
                hr;
                div class="tags" {
                    @for (tag, count) in counts.ranked() {
                        (self.tag_badge(&tag, Some(count)))
                    }
                }
            },
        )
    }
}

/// Fragment identifier for a tag on the tags page.
///
/// ASCII letters, digits, `-` and `_` are kept as they are. Every other byte
/// is percent-encoded, so distinct tags never share an anchor.
fn tag_anchor(tag: &str) -> String {
    let mut anchor = String::from("tag-");
    for byte in tag.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            anchor.push(byte as char);
        } else {
            anchor.push_str(&format!("%{:02X}", byte));
        }
    }
    anchor
}
