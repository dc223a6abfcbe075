//! Audit logging for the inventory CLI
//!
//! Records all create, update, delete operations with before/after values
//! in an append-only audit log, along with the acting user.
//!
//! The log file uses a line-delimited JSON format (JSONL): each line is a
//! complete JSON object representing one operation.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
