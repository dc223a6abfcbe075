//! CLI command handlers
//!
//! Each command group has its own module with a clap `Subcommand` enum and a
//! matching handler. Handlers load the persisted session where a command
//! needs one, call into the services, and print through the display layer.

pub mod category;
pub mod item;
pub mod report;
pub mod session;
pub mod user;

pub use category::{handle_category_command, CategoryCommands};
pub use item::{handle_item_command, ItemCommands};
pub use report::{handle_report_command, ReportCommands};
pub use session::{handle_login, handle_logout, handle_whoami};
pub use user::{handle_user_command, UserCommands};

use chrono::NaiveDate;

use crate::error::{InventoryError, InventoryResult};

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(input: &str) -> InventoryResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        InventoryError::Validation(format!(
            "Invalid date '{}': expected YYYY-MM-DD",
            input.trim()
        ))
    })
}
