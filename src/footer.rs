// ABOUTME: Footer helpers for the hero-slideshow crate
// ABOUTME: Supplies the current year for the copyright line

use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Text written into the `#current-year` element
pub fn footer_year_text() -> String {
    current_year().to_string()
}
