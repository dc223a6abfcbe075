//! User model
//!
//! Users log in with a username and password and carry a role that gates
//! administrative operations such as user management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::UserId;

/// A user's role within the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, including user management
    Admin,
    /// Day-to-day inventory work, no user management
    Moderator,
}

impl Role {
    /// Get all roles in display order
    pub fn all() -> &'static [Self] {
        &[Self::Admin, Self::Moderator]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Moderator => write!(f, "moderator"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "moderator" | "mod" => Ok(Self::Moderator),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// An application user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login name (unique, case-insensitive)
    pub username: String,

    /// Display name
    pub full_name: String,

    /// Role gating administrative operations
    pub role: Role,

    /// Argon2id PHC hash of the password. Never the plaintext.
    pub password_hash: String,

    /// When the user was created
    pub created_at: DateTime<Utc>,

    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with an already-hashed password
    pub fn new(
        username: impl Into<String>,
        full_name: impl Into<String>,
        role: Role,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: username.into(),
            full_name: full_name.into(),
            role,
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this user may manage other users
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Validate the user
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        if self.username.len() > 50 {
            return Err(UserValidationError::UsernameTooLong(self.username.len()));
        }

        if self.username.contains(char::is_whitespace) {
            return Err(UserValidationError::UsernameHasWhitespace);
        }

        if self.full_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFullName);
        }

        Ok(())
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.username)
    }
}

/// Validation errors for users
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    UsernameTooLong(usize),
    UsernameHasWhitespace,
    EmptyFullName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::UsernameTooLong(len) => {
                write!(f, "Username too long ({} chars, max 50)", len)
            }
            Self::UsernameHasWhitespace => write!(f, "Username cannot contain whitespace"),
            Self::EmptyFullName => write!(f, "Full name cannot be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}
