//! Display formatting for terminal output
//!
//! Formats data models as plain-text tables and detail views for the
//! terminal. All functions return strings; printing is the caller's job.

pub mod category;
pub mod item;
pub mod report;
pub mod user;

pub use category::{format_category_details, format_category_list};
pub use item::{format_item_details, format_item_list};
pub use report::format_report_summary;
pub use user::format_user_list;

/// Truncate a string to a maximum length with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
