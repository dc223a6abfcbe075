//! User service
//!
//! Authentication and user management. All mutations require an admin
//! session; the last admin account cannot be demoted or deleted.

use crate::audit::EntityType;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::session::Session;
use crate::config::settings::Settings;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Role, User, UserId};
use crate::storage::Storage;

/// Service for authentication and user management
pub struct UserService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Verify credentials and return a fresh session
    pub fn authenticate(&self, username: &str, password: &str) -> InventoryResult<Session> {
        let user = self
            .storage
            .users
            .get_by_username(username.trim())?
            .ok_or_else(|| InventoryError::Auth("Invalid credentials".into()))?;

        let matches = verify_password(password, &user.password_hash)
            .map_err(|e| InventoryError::Auth(format!("Password verification failed: {}", e)))?;

        if !matches {
            // Same message as unknown user, so usernames can't be probed
            return Err(InventoryError::Auth("Invalid credentials".into()));
        }

        Ok(Session::for_user(&user))
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> InventoryResult<Option<User>> {
        self.storage.users.get(id)
    }

    /// Find a user by username or ID string
    pub fn find(&self, identifier: &str) -> InventoryResult<Option<User>> {
        if let Some(user) = self.storage.users.get_by_username(identifier)? {
            return Ok(Some(user));
        }

        if let Ok(id) = identifier.parse::<UserId>() {
            return self.storage.users.get(id);
        }

        Ok(None)
    }

    /// List all users
    pub fn list(&self, session: &Session) -> InventoryResult<Vec<User>> {
        session.require_admin()?;
        self.storage.users.get_all()
    }

    /// Create a new user
    pub fn create(
        &self,
        session: &Session,
        username: &str,
        full_name: &str,
        role: Role,
        password: &str,
    ) -> InventoryResult<User> {
        session.require_admin()?;

        let username = username.trim();
        if self.storage.users.get_by_username(username)?.is_some() {
            return Err(InventoryError::Duplicate {
                entity_type: "User",
                identifier: username.to_string(),
            });
        }

        validate_password_strength(password, self.settings.password_min_length)
            .map_err(InventoryError::Validation)?;

        let hash = hash_password(password)
            .map_err(|e| InventoryError::Auth(format!("Failed to hash password: {}", e)))?;

        let user = User::new(username, full_name.trim(), role, hash);
        user.validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_create(
            EntityType::User,
            user.id.to_string(),
            Some(user.username.clone()),
            session.actor(),
            &user,
        )?;

        Ok(user)
    }

    /// Update a user's name, role, or password
    pub fn update(
        &self,
        session: &Session,
        id: UserId,
        full_name: Option<&str>,
        role: Option<Role>,
        password: Option<&str>,
    ) -> InventoryResult<User> {
        session.require_admin()?;

        let mut user = self
            .storage
            .users
            .get(id)?
            .ok_or_else(|| InventoryError::user_not_found(id.to_string()))?;

        let before = user.clone();

        if let Some(name) = full_name {
            user.full_name = name.trim().to_string();
        }

        if let Some(new_role) = role {
            if user.role == Role::Admin && new_role != Role::Admin {
                self.ensure_not_last_admin(&user)?;
            }
            user.role = new_role;
        }

        if let Some(password) = password {
            validate_password_strength(password, self.settings.password_min_length)
                .map_err(InventoryError::Validation)?;
            user.password_hash = hash_password(password)
                .map_err(|e| InventoryError::Auth(format!("Failed to hash password: {}", e)))?;
        }

        user.updated_at = chrono::Utc::now();
        user.validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        self.storage.log_update(
            EntityType::User,
            user.id.to_string(),
            Some(user.username.clone()),
            session.actor(),
            &before,
            &user,
        )?;

        Ok(user)
    }

    /// Delete a user
    pub fn delete(&self, session: &Session, id: UserId) -> InventoryResult<()> {
        session.require_admin()?;

        let user = self
            .storage
            .users
            .get(id)?
            .ok_or_else(|| InventoryError::user_not_found(id.to_string()))?;

        if user.role == Role::Admin {
            self.ensure_not_last_admin(&user)?;
        }

        self.storage.users.delete(id)?;
        self.storage.users.save()?;

        self.storage.log_delete(
            EntityType::User,
            user.id.to_string(),
            Some(user.username.clone()),
            session.actor(),
            &user,
        )?;

        Ok(())
    }

    fn ensure_not_last_admin(&self, user: &User) -> InventoryResult<()> {
        if self.storage.users.admin_count()? <= 1 {
            return Err(InventoryError::Validation(format!(
                "Cannot remove '{}': it is the last admin account",
                user.username
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::InventoryPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings, Session) {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        let settings = Settings::default();

        let hash = hash_password("admin-pass").unwrap();
        let admin = User::new("admin", "Administrator", Role::Admin, hash);
        storage.users.upsert(admin.clone()).unwrap();
        let session = Session::for_user(&admin);

        (temp_dir, storage, settings, session)
    }

    #[test]
    fn test_authenticate_success_and_failure() {
        let (_t, storage, settings, _session) = setup();
        let service = UserService::new(&storage, &settings);

        let session = service.authenticate("admin", "admin-pass").unwrap();
        assert_eq!(session.username, "admin");
        assert!(session.is_admin());

        assert!(service.authenticate("admin", "wrong").is_err());
        assert!(service.authenticate("nobody", "admin-pass").is_err());
    }

    #[test]
    fn test_create_requires_admin() {
        let (_t, storage, settings, admin_session) = setup();
        let service = UserService::new(&storage, &settings);

        let moderator = service
            .create(&admin_session, "mira", "Mira Kovac", Role::Moderator, "secret")
            .unwrap();

        let mod_session = Session::for_user(&moderator);
        let err = service
            .create(&mod_session, "other", "Other", Role::Moderator, "secret")
            .unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (_t, storage, settings, session) = setup();
        let service = UserService::new(&storage, &settings);

        service
            .create(&session, "mira", "Mira Kovac", Role::Moderator, "secret")
            .unwrap();
        let err = service
            .create(&session, "MIRA", "Other Person", Role::Moderator, "secret")
            .unwrap_err();
        assert!(matches!(err, InventoryError::Duplicate { .. }));
    }

    #[test]
    fn test_short_password_rejected() {
        let (_t, storage, settings, session) = setup();
        let service = UserService::new(&storage, &settings);

        let err = service
            .create(&session, "mira", "Mira Kovac", Role::Moderator, "abc")
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_cannot_delete_last_admin() {
        let (_t, storage, settings, session) = setup();
        let service = UserService::new(&storage, &settings);

        let err = service.delete(&session, session.user_id).unwrap_err();
        assert!(err.is_validation());

        // With a second admin the first can go
        service
            .create(&session, "backup", "Backup Admin", Role::Admin, "secret")
            .unwrap();
        service.delete(&session, session.user_id).unwrap();
    }

    #[test]
    fn test_cannot_demote_last_admin() {
        let (_t, storage, settings, session) = setup();
        let service = UserService::new(&storage, &settings);

        let err = service
            .update(&session, session.user_id, None, Some(Role::Moderator), None)
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_update_password_changes_hash() {
        let (_t, storage, settings, session) = setup();
        let service = UserService::new(&storage, &settings);

        let before = service.get(session.user_id).unwrap().unwrap();
        service
            .update(&session, session.user_id, None, None, Some("new-pass"))
            .unwrap();
        let after = service.get(session.user_id).unwrap().unwrap();

        assert_ne!(before.password_hash, after.password_hash);
        assert!(service.authenticate("admin", "new-pass").is_ok());
        assert!(service.authenticate("admin", "admin-pass").is_err());
    }
}
