//! Storage initialization
//!
//! Handles first-run setup: seeding the administrator account and, when
//! enabled, starter categories with a few demo items.

use chrono::NaiveDate;

use crate::auth::password::hash_password;
use crate::config::paths::InventoryPaths;
use crate::config::settings::Settings;
use crate::error::{InventoryError, InventoryResult};
use crate::models::{Category, Item, ItemStatus, ItemUid, Role, User};

use super::Storage;

/// Default credentials seeded on first run. The init command warns the user
/// to change the password immediately.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Initialize storage for a fresh installation
///
/// Seeds one administrator if no users exist, and starter categories plus
/// demo items if the store is empty and demo seeding is enabled. Returns
/// whether the admin account was created by this call.
pub fn initialize_storage(paths: &InventoryPaths, settings: &Settings) -> InventoryResult<bool> {
    paths.ensure_directories()?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let mut seeded_admin = false;

    if storage.users.count()? == 0 {
        seed_admin(&storage)?;
        seeded_admin = true;
    }

    if settings.seed_demo_data && storage.categories.count()? == 0 && storage.items.count()? == 0 {
        seed_demo_data(&storage)?;
    }

    storage.save_all()?;
    Ok(seeded_admin)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &InventoryPaths) -> bool {
    !paths.users_file().exists()
}

fn seed_admin(storage: &Storage) -> InventoryResult<()> {
    let hash = hash_password(DEFAULT_ADMIN_PASSWORD)
        .map_err(|e| InventoryError::Auth(format!("Failed to hash seed password: {}", e)))?;

    let admin = User::new(
        DEFAULT_ADMIN_USERNAME,
        "Administrator",
        Role::Admin,
        hash,
    );
    storage.users.upsert(admin)
}

fn seed_demo_data(storage: &Storage) -> InventoryResult<()> {
    let computers = Category::with_description("Computers", "Desktops and laptops");
    let printers = Category::with_description("Printers", "Laser and inkjet");
    let furniture = Category::with_description("Furniture", "Desks, chairs");

    let demo_items = [
        (
            1001,
            computers.id,
            "Dell OptiPlex 7090",
            "i5, 16GB, 512GB SSD",
            (2024, 2, 11),
            ItemStatus::Active,
        ),
        (
            1002,
            computers.id,
            "Lenovo ThinkPad T14",
            "Ryzen 7, 16GB",
            (2025, 1, 21),
            ItemStatus::Active,
        ),
        (
            1003,
            printers.id,
            "HP LaserJet Pro M404dn",
            "Monochrome laser",
            (2023, 10, 5),
            ItemStatus::Active,
        ),
        (
            1004,
            furniture.id,
            "Ergonomic chair",
            "Black, mesh",
            (2022, 5, 30),
            ItemStatus::WrittenOff,
        ),
    ];

    storage.categories.upsert(computers.clone())?;
    storage.categories.upsert(printers.clone())?;
    storage.categories.upsert(furniture.clone())?;

    for (uid, category_id, name, description, (y, m, d), status) in demo_items {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| InventoryError::Storage("Invalid seed date".into()))?;
        let mut item = Item::new(ItemUid::new(uid), category_id, name, date);
        item.description = description.into();
        item.status = status;
        storage.items.upsert(item)?;
    }

    Ok(())
}
