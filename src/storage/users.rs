//! User repository for JSON storage
//!
//! Manages loading and saving users to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::InventoryError;
use crate::models::{Role, User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct UserData {
    pub users: Vec<User>,
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    users: RwLock<HashMap<UserId, User>>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), InventoryError> {
        let file_data: UserData = read_json(&self.path)?;

        let mut users = self
            .users
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.clear();
        for user in file_data.users {
            users.insert(user.id, user);
        }

        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = users.values().cloned().collect();
        list.sort_by(|a, b| a.username.cmp(&b.username));

        write_json_atomic(&self.path, &UserData { users: list })
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Result<Option<User>, InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(users.get(&id).cloned())
    }

    /// Get a user by username (case-insensitive)
    pub fn get_by_username(&self, username: &str) -> Result<Option<User>, InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let username_lower = username.to_lowercase();
        Ok(users
            .values()
            .find(|u| u.username.to_lowercase() == username_lower)
            .cloned())
    }

    /// Get all users sorted by username
    pub fn get_all(&self) -> Result<Vec<User>, InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = users.values().cloned().collect();
        list.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(list)
    }

    /// Insert or update a user
    pub fn upsert(&self, user: User) -> Result<(), InventoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        users.insert(user.id, user);
        Ok(())
    }

    /// Delete a user
    pub fn delete(&self, id: UserId) -> Result<bool, InventoryError> {
        let mut users = self
            .users
            .write()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(users.remove(&id).is_some())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.len())
    }

    /// Count users with the admin role
    pub fn admin_count(&self) -> Result<usize, InventoryError> {
        let users = self
            .users
            .read()
            .map_err(|e| InventoryError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(users.values().filter(|u| u.role == Role::Admin).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, UserRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.json");
        let repo = UserRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_crud_operations() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let user = User::new("admin", "Administrator", Role::Admin, "$argon2id$fake");
        let id = user.id;

        repo.upsert(user).unwrap();
        assert_eq!(repo.count().unwrap(), 1);
        assert_eq!(repo.admin_count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.username, "admin");

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!repo.delete(id).unwrap());
    }

    #[test]
    fn test_username_lookup_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let user = User::new("Mira", "Mira Kovac", Role::Moderator, "$argon2id$fake");
        repo.upsert(user).unwrap();

        assert!(repo.get_by_username("mira").unwrap().is_some());
        assert!(repo.get_by_username("MIRA").unwrap().is_some());
        assert!(repo.get_by_username("nobody").unwrap().is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(User::new("b", "User B", Role::Moderator, "h")).unwrap();
        repo.upsert(User::new("a", "User A", Role::Admin, "h")).unwrap();
        repo.save().unwrap();

        repo.load().unwrap();
        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        // sorted by username
        assert_eq!(all[0].username, "a");
        assert_eq!(all[1].username, "b");
    }
}
