//! Authentication for the inventory CLI
//!
//! Password hashing with Argon2id and the explicit session context passed
//! into services instead of ambient globals.

pub mod password;
pub mod session;

pub use password::{hash_password, verify_password};
pub use session::{Session, SessionStore};
