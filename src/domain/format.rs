//! Display formatting for post dates

use chrono::NaiveDate;

/// Long English date, e.g. "January 17, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Machine-readable date for `<time datetime="...">`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
