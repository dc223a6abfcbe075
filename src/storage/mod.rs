//! Storage layer for the inventory CLI
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus audit logging of every mutation.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod items;
pub mod users;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_bytes_atomic, write_json_atomic};
pub use init::initialize_storage;
pub use items::ItemRepository;
pub use users::UserRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::InventoryPaths;
use crate::error::InventoryError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: InventoryPaths,
    audit: AuditLogger,
    pub users: UserRepository,
    pub categories: CategoryRepository,
    pub items: ItemRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: InventoryPaths) -> Result<Self, InventoryError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserRepository::new(paths.users_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            items: ItemRepository::new(paths.items_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &InventoryPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), InventoryError> {
        self.users.load()?;
        self.categories.load()?;
        self.items.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), InventoryError> {
        self.users.save()?;
        self.categories.save()?;
        self.items.save()?;
        Ok(())
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        actor: Option<String>,
        entity: &T,
    ) -> Result<(), InventoryError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, actor, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        actor: Option<String>,
        before: &T,
        after: &T,
    ) -> Result<(), InventoryError> {
        let before_json = serde_json::to_value(before)?;
        let after_json = serde_json::to_value(after)?;
        let diff = generate_diff(&before_json, &after_json);

        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            actor,
            before,
            after,
            diff,
        ))
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        actor: Option<String>,
        entity: &T,
    ) -> Result<(), InventoryError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, actor, entity))
    }
}
