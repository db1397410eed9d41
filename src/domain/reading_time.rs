//! Reading time estimation

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Average silent reading rate for non-fiction
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 238;

/// Matches HTML/JSX tags embedded in post bodies
fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Count whitespace-separated words, ignoring markup tags
pub fn word_count(text: &str) -> usize {
    markup_regex()
        .replace_all(text, " ")
        .split_whitespace()
        .count()
}

/// Estimated minutes needed to read a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    pub minutes: u32,
}

impl ReadingTime {
    /// Estimate reading time, rounding up to whole minutes (at least one).
    ///
    /// `words_per_minute` must be non-zero; config loading rejects zero.
    pub fn estimate(text: &str, words_per_minute: u32) -> Self {
        let words = word_count(text) as u64;
        let wpm = u64::from(words_per_minute.max(1));
        let minutes = words.div_ceil(wpm).max(1);
        ReadingTime {
            minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        }
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.minutes)
    }
}
