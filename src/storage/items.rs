//! Item repository for JSON storage
//!
//! Manages loading and saving inventory items to items.json. Items are keyed
//! by their asset tag and listed in tag order.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::InventoryError;
use crate::models::{CategoryId, Item, ItemUid};

use super::file_io::{read_json, write_json_atomic};

/// Serializable item data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ItemData {
    pub items: Vec<Item>,
}

/// Repository for item persistence
pub struct ItemRepository {
    path: PathBuf,
    items: RwLock<HashMap<ItemUid, Item>>,
}

impl ItemRepository {
    /// Create a new item repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(HashMap::new()),
        }
    }

    /// Load items from disk
    pub fn load(&self) -> Result<(), InventoryError> {
        let file_data: ItemData = read_json(&self.path)?;

        let mut items = self
            .items
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        items.clear();
        for item in file_data.items {
            items.insert(item.uid, item);
        }

        Ok(())
    }

    /// Save items to disk
    pub fn save(&self) -> Result<(), InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = items.values().cloned().collect();
        list.sort_by_key(|i| i.uid);

        write_json_atomic(&self.path, &ItemData { items: list })
    }

    /// Get an item by asset tag
    pub fn get(&self, uid: ItemUid) -> Result<Option<Item>, InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items.get(&uid).cloned())
    }

    /// Get all items sorted by asset tag
    pub fn get_all(&self) -> Result<Vec<Item>, InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = items.values().cloned().collect();
        list.sort_by_key(|i| i.uid);
        Ok(list)
    }

    /// Insert or update an item
    pub fn upsert(&self, item: Item) -> Result<(), InventoryError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        items.insert(item.uid, item);
        Ok(())
    }

    /// Delete an item
    pub fn delete(&self, uid: ItemUid) -> Result<bool, InventoryError> {
        let mut items = self
            .items
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(items.remove(&uid).is_some())
    }

    /// The next free asset tag: one past the highest tag in use,
    /// or the base tag for an empty inventory.
    pub fn next_uid(&self) -> Result<ItemUid, InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items
            .keys()
            .max()
            .map(|uid| uid.next())
            .unwrap_or(ItemUid::FIRST))
    }

    /// Count items referencing a category
    pub fn count_in_category(&self, category_id: CategoryId) -> Result<usize, InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(items
            .values()
            .filter(|i| i.category_id == category_id)
            .count())
    }

    /// Count items
    pub fn count(&self) -> Result<usize, InventoryError> {
        let items = self
            .items
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, ItemRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("items.json");
        let repo = ItemRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_item(uid: u32, category_id: CategoryId) -> Item {
        Item::new(
            ItemUid::new(uid),
            category_id,
            format!("Item {}", uid),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_next_uid_starts_at_base() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.next_uid().unwrap(), ItemUid::FIRST);
    }

    #[test]
    fn test_next_uid_follows_max() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cat = CategoryId::new();
        repo.upsert(sample_item(1001, cat)).unwrap();
        repo.upsert(sample_item(1050, cat)).unwrap();

        assert_eq!(repo.next_uid().unwrap(), ItemUid::new(1051));
    }

    #[test]
    fn test_crud_operations() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cat = CategoryId::new();
        repo.upsert(sample_item(1001, cat)).unwrap();

        let retrieved = repo.get(ItemUid::new(1001)).unwrap().unwrap();
        assert_eq!(retrieved.name, "Item 1001");

        assert!(repo.delete(ItemUid::new(1001)).unwrap());
        assert!(repo.get(ItemUid::new(1001)).unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted_by_uid() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cat = CategoryId::new();
        repo.upsert(sample_item(1003, cat)).unwrap();
        repo.upsert(sample_item(1001, cat)).unwrap();
        repo.upsert(sample_item(1002, cat)).unwrap();

        let uids: Vec<u32> = repo
            .get_all()
            .unwrap()
            .iter()
            .map(|i| i.uid.value())
            .collect();
        assert_eq!(uids, vec![1001, 1002, 1003]);
    }

    #[test]
    fn test_count_in_category() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cat_a = CategoryId::new();
        let cat_b = CategoryId::new();
        repo.upsert(sample_item(1001, cat_a)).unwrap();
        repo.upsert(sample_item(1002, cat_a)).unwrap();
        repo.upsert(sample_item(1003, cat_b)).unwrap();

        assert_eq!(repo.count_in_category(cat_a).unwrap(), 2);
        assert_eq!(repo.count_in_category(cat_b).unwrap(), 1);
        assert_eq!(repo.count_in_category(CategoryId::new()).unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let cat = CategoryId::new();
        repo.upsert(sample_item(1001, cat)).unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);
    }
}
