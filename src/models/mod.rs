//! Core data models for the inventory CLI
//!
//! This module contains the data structures that represent the inventory
//! domain: users, categories, and inventory items.

pub mod category;
pub mod ids;
pub mod item;
pub mod user;

pub use category::Category;
pub use ids::{CategoryId, ItemUid, UserId};
pub use item::{Item, ItemStatus};
pub use user::{Role, User};
