//! Item service
//!
//! CRUD over inventory items: add with an explicit or auto-assigned asset
//! tag, edit, write off, delete. Every item must reference an existing
//! category.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::auth::session::Session;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{CategoryId, Item, ItemStatus, ItemUid};
use crate::storage::Storage;

/// Changes to apply to an existing item. `None` fields are left untouched.
#[derive(Debug, Default, Clone)]
pub struct ItemUpdate<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub category_id: Option<CategoryId>,
    pub acquired_on: Option<NaiveDate>,
    pub status: Option<ItemStatus>,
}

/// Service for item management
pub struct ItemService<'a> {
    storage: &'a Storage,
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new item
    ///
    /// With `uid: None` the next free asset tag is assigned.
    pub fn create(
        &self,
        session: &Session,
        uid: Option<ItemUid>,
        category_id: CategoryId,
        name: &str,
        description: &str,
        acquired_on: NaiveDate,
    ) -> InventoryResult<Item> {
        // Verify category exists
        if self.storage.categories.get(category_id)?.is_none() {
            return Err(InventoryError::category_not_found(category_id.to_string()));
        }

        let uid = match uid {
            Some(uid) => {
                if self.storage.items.get(uid)?.is_some() {
                    return Err(InventoryError::Duplicate {
                        entity_type: "Item",
                        identifier: uid.to_string(),
                    });
                }
                uid
            }
            None => self.storage.items.next_uid()?,
        };

        let mut item = Item::new(uid, category_id, name.trim(), acquired_on);
        item.description = description.trim().to_string();
        item.validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.items.upsert(item.clone())?;
        self.storage.items.save()?;

        self.storage.log_create(
            EntityType::Item,
            item.uid.to_string(),
            Some(item.name.clone()),
            session.actor(),
            &item,
        )?;

        Ok(item)
    }

    /// Get an item by asset tag
    pub fn get(&self, uid: ItemUid) -> InventoryResult<Option<Item>> {
        self.storage.items.get(uid)
    }

    /// List all items in asset-tag order
    pub fn list(&self) -> InventoryResult<Vec<Item>> {
        self.storage.items.get_all()
    }

    /// Update an item
    pub fn update(
        &self,
        session: &Session,
        uid: ItemUid,
        changes: ItemUpdate<'_>,
    ) -> InventoryResult<Item> {
        let mut item = self
            .storage
            .items
            .get(uid)?
            .ok_or_else(|| InventoryError::item_not_found(uid.to_string()))?;

        let before = item.clone();

        if let Some(name) = changes.name {
            item.name = name.trim().to_string();
        }

        if let Some(description) = changes.description {
            item.description = description.trim().to_string();
        }

        if let Some(category_id) = changes.category_id {
            if self.storage.categories.get(category_id)?.is_none() {
                return Err(InventoryError::category_not_found(category_id.to_string()));
            }
            item.category_id = category_id;
        }

        if let Some(acquired_on) = changes.acquired_on {
            item.acquired_on = acquired_on;
        }

        if let Some(status) = changes.status {
            item.status = status;
        }

        item.updated_at = chrono::Utc::now();
        item.validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.items.upsert(item.clone())?;
        self.storage.items.save()?;

        self.storage.log_update(
            EntityType::Item,
            item.uid.to_string(),
            Some(item.name.clone()),
            session.actor(),
            &before,
            &item,
        )?;

        Ok(item)
    }

    /// Mark an item as written off
    pub fn write_off(&self, session: &Session, uid: ItemUid) -> InventoryResult<Item> {
        let mut item = self
            .storage
            .items
            .get(uid)?
            .ok_or_else(|| InventoryError::item_not_found(uid.to_string()))?;

        if item.status == ItemStatus::WrittenOff {
            return Err(InventoryError::Validation(format!(
                "Item #{} is already written off",
                uid
            )));
        }

        let before = item.clone();
        item.write_off();

        self.storage.items.upsert(item.clone())?;
        self.storage.items.save()?;

        self.storage.log_update(
            EntityType::Item,
            item.uid.to_string(),
            Some(item.name.clone()),
            session.actor(),
            &before,
            &item,
        )?;

        Ok(item)
    }

    /// Delete an item permanently
    pub fn delete(&self, session: &Session, uid: ItemUid) -> InventoryResult<()> {
        let item = self
            .storage
            .items
            .get(uid)?
            .ok_or_else(|| InventoryError::item_not_found(uid.to_string()))?;

        self.storage.items.delete(uid)?;
        self.storage.items.save()?;

        self.storage.log_delete(
            EntityType::Item,
            item.uid.to_string(),
            Some(item.name.clone()),
            session.actor(),
            &item,
        )?;

        Ok(())
    }
}
