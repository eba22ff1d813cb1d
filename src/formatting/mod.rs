// src/formatting/mod.rs
//! Turns normalized posts into display strings and HTML pages.

pub mod dates;
pub mod reading_time;
pub mod rich_text;
pub mod templates;

pub use self::dates::{display_date, display_optional_date};
pub use self::reading_time::reading_minutes;
pub use self::rich_text::{as_html, as_text};
pub use self::templates::PageRenderer;
