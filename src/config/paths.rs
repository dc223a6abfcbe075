//! Path management for the inventory CLI
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `INVENTORY_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/inventory-cli` or `~/.config/inventory-cli`
//! 3. Windows: `%APPDATA%\inventory-cli`

use std::path::PathBuf;

use crate::error::InventoryError;

/// Manages all paths used by the inventory CLI
#[derive(Debug, Clone)]
pub struct InventoryPaths {
    /// Base directory for all application data
    base_dir: PathBuf,
}

impl InventoryPaths {
    /// Create a new InventoryPaths instance
    ///
    /// Path resolution:
    /// 1. `INVENTORY_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/inventory-cli` or `~/.config/inventory-cli`
    /// 3. Windows: `%APPDATA%\inventory-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, InventoryError> {
        let base_dir = if let Ok(custom) = std::env::var("INVENTORY_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create InventoryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/inventory-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/inventory-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the current session file
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join("session.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to users.json
    pub fn users_file(&self) -> PathBuf {
        self.data_dir().join("users.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to items.json
    pub fn items_file(&self) -> PathBuf {
        self.data_dir().join("items.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), InventoryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| InventoryError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| InventoryError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the application has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, InventoryError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("inventory-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, InventoryError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| InventoryError::Config("APPDATA environment variable not set".into()))?;
    Ok(PathBuf::from(appdata).join("inventory-cli"))
}
