//! User settings for the inventory CLI
//!
//! Manages preferences such as password policy and first-run seeding.

use serde::{Deserialize, Serialize};

use super::paths::InventoryPaths;
use crate::error::InventoryError;

/// User settings for the inventory CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Minimum password length enforced when creating or editing users
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,

    /// Whether `init` seeds starter categories and demo items
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_password_min_length() -> usize {
    4
}

fn default_seed_demo_data() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            password_min_length: default_password_min_length(),
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating default settings if the file doesn't exist
    pub fn load_or_create(paths: &InventoryPaths) -> Result<Self, InventoryError> {
        let path = paths.settings_file();

        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| InventoryError::Config(format!("Failed to read settings: {}", e)))?;
            serde_json::from_str(&content)
                .map_err(|e| InventoryError::Config(format!("Failed to parse settings: {}", e)))
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &InventoryPaths) -> Result<(), InventoryError> {
        paths.ensure_directories()?;

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| InventoryError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), content)
            .map_err(|e| InventoryError::Config(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }
}
