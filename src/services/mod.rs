//! Service layer for the inventory CLI
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, authorization, and cross-entity checks.

pub mod category;
pub mod item;
pub mod user;

pub use category::CategoryService;
pub use item::ItemService;
pub use user::UserService;
