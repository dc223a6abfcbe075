//! Configuration management for the inventory CLI
//!
//! Handles path resolution and user settings.

pub mod paths;
pub mod settings;

pub use paths::InventoryPaths;
pub use settings::Settings;
