//! Category service
//!
//! CRUD over categories. Deleting a category that items still reference is
//! blocked; the items must be deleted or re-categorized first.

use crate::audit::EntityType;
use crate::auth::session::Session;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Category, CategoryId};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        session: &Session,
        name: &str,
        description: &str,
    ) -> InventoryResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Check for duplicate name
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(InventoryError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::with_description(name, description.trim());
        category
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            session.actor(),
            &category,
        )?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> InventoryResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name or ID string
    pub fn find(&self, identifier: &str) -> InventoryResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        Ok(None)
    }

    /// List all categories
    pub fn list(&self) -> InventoryResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Update a category's name or description
    pub fn update(
        &self,
        session: &Session,
        id: CategoryId,
        name: Option<&str>,
        description: Option<&str>,
    ) -> InventoryResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| InventoryError::category_not_found(id.to_string()))?;

        let before = category.clone();

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(InventoryError::Validation(
                    "Category name cannot be empty".into(),
                ));
            }

            // Check for duplicate
            if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
                if existing.id != id {
                    return Err(InventoryError::Duplicate {
                        entity_type: "Category",
                        identifier: new_name.to_string(),
                    });
                }
            }

            category.name = new_name.to_string();
        }

        if let Some(new_description) = description {
            category.description = new_description.trim().to_string();
        }

        category.updated_at = chrono::Utc::now();
        category
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_update(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            session.actor(),
            &before,
            &category,
        )?;

        Ok(category)
    }

    /// Delete a category
    ///
    /// Fails while items still reference the category.
    pub fn delete(&self, session: &Session, id: CategoryId) -> InventoryResult<()> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| InventoryError::category_not_found(id.to_string()))?;

        let dependent = self.storage.items.count_in_category(id)?;
        if dependent > 0 {
            return Err(InventoryError::Validation(format!(
                "Cannot delete category '{}': {} item(s) still reference it. \
                 Delete or re-categorize them first.",
                category.name, dependent
            )));
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            session.actor(),
            &category,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::InventoryPaths;
    use crate::models::{Item, ItemUid, Role, User};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let admin = User::new("admin", "Administrator", Role::Admin, "$argon2id$fake");
        let session = Session::for_user(&admin);
        (temp_dir, storage, session)
    }

    #[test]
    fn test_create_and_find() {
        let (_t, storage, session) = setup();
        let service = CategoryService::new(&storage);

        let category = service
            .create(&session, "Computers", "Desktops and laptops")
            .unwrap();

        assert!(service.find("computers").unwrap().is_some());
        assert!(service
            .find(&category.id.to_string())
            .unwrap()
            .is_some());
        assert!(service.find("Monitors").unwrap().is_none());
    }

    #[test]
    fn test_create_rejects_duplicates_and_blanks() {
        let (_t, storage, session) = setup();
        let service = CategoryService::new(&storage);

        service.create(&session, "Printers", "").unwrap();

        let err = service.create(&session, "printers", "").unwrap_err();
        assert!(matches!(err, InventoryError::Duplicate { .. }));

        let err = service.create(&session, "   ", "").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_rename() {
        let (_t, storage, session) = setup();
        let service = CategoryService::new(&storage);

        let category = service.create(&session, "Misc", "").unwrap();
        let updated = service
            .update(&session, category.id, Some("Furniture"), Some("Desks"))
            .unwrap();

        assert_eq!(updated.name, "Furniture");
        assert_eq!(updated.description, "Desks");
        // Renaming to itself is allowed
        service
            .update(&session, category.id, Some("Furniture"), None)
            .unwrap();
    }

    #[test]
    fn test_delete_blocked_while_referenced() {
        let (_t, storage, session) = setup();
        let service = CategoryService::new(&storage);

        let category = service.create(&session, "Computers", "").unwrap();
        let item = Item::new(
            ItemUid::new(1001),
            category.id,
            "Dell OptiPlex",
            NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
        );
        storage.items.upsert(item).unwrap();

        let err = service.delete(&session, category.id).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("1 item(s)"));

        storage.items.delete(ItemUid::new(1001)).unwrap();
        service.delete(&session, category.id).unwrap();
        assert!(service.get(category.id).unwrap().is_none());
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_t, storage, session) = setup();
        let service = CategoryService::new(&storage);

        let category = service.create(&session, "Computers", "").unwrap();
        service
            .update(&session, category.id, Some("Workstations"), None)
            .unwrap();
        service.delete(&session, category.id).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| e.actor.as_deref() == Some("admin")));
    }
}
