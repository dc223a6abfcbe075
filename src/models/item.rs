//! Inventory item model
//!
//! An item is one physical asset: a labelled uid, a category, an acquisition
//! date, and a lifecycle status. Writing an item off keeps the record but
//! marks it as removed from active inventory.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, ItemUid};

/// Lifecycle status of an inventory item
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ItemStatus {
    /// In active inventory
    Active,
    /// Retired from active inventory
    WrittenOff,
    /// Neither active nor written off (e.g. on loan, in repair)
    Other,
}

impl ItemStatus {
    /// Get all statuses in display order
    pub fn all() -> &'static [Self] {
        &[Self::Active, Self::WrittenOff, Self::Other]
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::WrittenOff => write!(f, "written-off"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "written-off" | "writtenoff" | "written_off" => Ok(Self::WrittenOff),
            "other" => Ok(Self::Other),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// A single inventory item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Asset tag printed on the physical label
    pub uid: ItemUid,

    /// The category this item belongs to
    pub category_id: CategoryId,

    /// Item name (e.g. "Dell OptiPlex 7090")
    pub name: String,

    /// Free-text notes
    #[serde(default)]
    pub description: String,

    /// Acquisition date; its calendar year drives the year filter
    pub acquired_on: NaiveDate,

    /// Lifecycle status
    pub status: ItemStatus,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Create a new active item
    pub fn new(
        uid: ItemUid,
        category_id: CategoryId,
        name: impl Into<String>,
        acquired_on: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            uid,
            category_id,
            name: name.into(),
            description: String::new(),
            acquired_on,
            status: ItemStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// The acquisition year used by the year filter
    pub fn year(&self) -> i32 {
        self.acquired_on.year()
    }

    /// Mark this item as written off
    pub fn write_off(&mut self) {
        self.status = ItemStatus::WrittenOff;
        self.updated_at = Utc::now();
    }

    /// Whether this item is still in active inventory
    pub fn is_active(&self) -> bool {
        self.status == ItemStatus::Active
    }

    /// Validate the item
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(ItemValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.uid, self.name)
    }
}

/// Validation errors for items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Item name cannot be empty"),
            Self::NameTooLong(len) => write!(f, "Item name too long ({} chars, max 100)", len),
        }
    }
}

impl std::error::Error for ItemValidationError {}
