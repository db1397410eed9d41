//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal blog content tool and static site builder", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new blog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Site title
        #[arg(short, long, default_value = "Blog")]
        title: String,

        /// Default author for posts
        #[arg(short, long, default_value = "")]
        author: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// List posts, newest first
    Posts {
        /// Include unpublished drafts
        #[arg(long)]
        all: bool,

        /// Only posts with this tag
        #[arg(long)]
        tag: Option<String>,

        /// Show at most N posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// List tags by number of posts
    Tags {
        /// Include unpublished drafts
        #[arg(long)]
        all: bool,
    },

    /// Show a post's metadata
    Show {
        /// Post slug
        slug: String,
    },

    /// Show, toggle or set the color theme
    Theme {
        /// "toggle", "dark" or "light"; omit to print the current theme
        action: Option<String>,
    },

    /// Render the site to static HTML
    Build {
        /// Output directory (default: <root>/public)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Compute the scroll progress percentage of a page
    #[command(allow_negative_numbers = true)]
    Progress {
        /// Pixels scrolled from the top
        scroll_top: f64,

        /// Total document height
        scroll_height: f64,

        /// Viewport height
        client_height: f64,
    },
}
