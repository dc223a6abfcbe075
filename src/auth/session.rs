//! Session context
//!
//! The logged-in user is an explicit value passed into services, not an
//! ambient global. Between invocations it is persisted to session.json so
//! the CLI behaves like a logged-in application until `logout`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::paths::InventoryPaths;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Role, User, UserId};

/// The current interactive session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// The logged-in user's ID
    pub user_id: UserId,

    /// Login name, recorded as the audit actor
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Role at login time
    pub role: Role,

    /// When the session was started
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Start a session for an authenticated user
    pub fn for_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            full_name: user.full_name.clone(),
            role: user.role,
            logged_in_at: Utc::now(),
        }
    }

    /// Whether this session has administrative rights
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fail unless this session has administrative rights
    pub fn require_admin(&self) -> InventoryResult<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(InventoryError::Auth(
                "This operation requires the admin role".into(),
            ))
        }
    }

    /// The audit actor for this session
    pub fn actor(&self) -> Option<String> {
        Some(self.username.clone())
    }
}

/// Persists the current session to session.json
pub struct SessionStore {
    paths: InventoryPaths,
}

impl SessionStore {
    /// Create a session store over the configured paths
    pub fn new(paths: InventoryPaths) -> Self {
        Self { paths }
    }

    /// Load the current session, if one exists
    pub fn load(&self) -> InventoryResult<Option<Session>> {
        let path = self.paths.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| InventoryError::Io(format!("Failed to read session: {}", e)))?;
        let session = serde_json::from_str(&content)
            .map_err(|e| InventoryError::Json(format!("Failed to parse session: {}", e)))?;
        Ok(Some(session))
    }

    /// Load the current session, failing if nobody is logged in
    pub fn require(&self) -> InventoryResult<Session> {
        self.load()?.ok_or_else(|| {
            InventoryError::Auth("Not logged in. Run 'inventory login <username>' first.".into())
        })
    }

    /// Persist a session
    pub fn save(&self, session: &Session) -> InventoryResult<()> {
        self.paths.ensure_directories()?;
        let content = serde_json::to_string_pretty(session)
            .map_err(|e| InventoryError::Json(format!("Failed to serialize session: {}", e)))?;
        std::fs::write(self.paths.session_file(), content)
            .map_err(|e| InventoryError::Io(format!("Failed to write session: {}", e)))?;
        Ok(())
    }

    /// Remove the current session. Returns whether one existed.
    pub fn clear(&self) -> InventoryResult<bool> {
        let path = self.paths.session_file();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .map_err(|e| InventoryError::Io(format!("Failed to remove session: {}", e)))?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_user(role: Role) -> User {
        User::new("mira", "Mira Kovac", role, "$argon2id$fake")
    }

    #[test]
    fn test_require_admin() {
        let admin = Session::for_user(&sample_user(Role::Admin));
        assert!(admin.require_admin().is_ok());

        let moderator = Session::for_user(&sample_user(Role::Moderator));
        let err = moderator.require_admin().unwrap_err();
        assert!(err.is_auth());
    }

    #[test]
    fn test_save_load_clear_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = InventoryPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = SessionStore::new(paths);

        assert!(store.load().unwrap().is_none());
        assert!(store.require().is_err());

        let session = Session::for_user(&sample_user(Role::Moderator));
        store.save(&session).unwrap();

        let loaded = store.require().unwrap();
        assert_eq!(loaded.username, "mira");
        assert_eq!(loaded.role, Role::Moderator);

        assert!(store.clear().unwrap());
        assert!(!store.clear().unwrap());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_actor_is_username() {
        let session = Session::for_user(&sample_user(Role::Admin));
        assert_eq!(session.actor().as_deref(), Some("mira"));
    }
}
