//! Report pipeline
//!
//! Filter criteria narrow the item list, the aggregator counts the result by
//! status, category, and year, and the exporters render the outcome. The
//! whole pipeline is pure: it reads items and categories and produces values.

pub mod filter;
pub mod stats;

pub use filter::{filter_items, filter_items_owned, ItemFilter};
pub use stats::InventoryStats;

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Category, CategoryId, Item, ItemStatus, ItemUid};

/// Name shown when an item references a category that no longer resolves
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// One line of a report: an item joined with its category name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub uid: ItemUid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub acquired_on: NaiveDate,
    pub status: ItemStatus,
}

impl ReportRow {
    /// The acquisition year, as used by the year grouping
    pub fn year(&self) -> i32 {
        use chrono::Datelike;
        self.acquired_on.year()
    }
}

/// Join items with their category names, preserving item order
pub fn build_rows(items: &[Item], categories: &[Category]) -> Vec<ReportRow> {
    let names: HashMap<CategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();

    items
        .iter()
        .map(|item| ReportRow {
            uid: item.uid,
            name: item.name.clone(),
            category: names
                .get(&item.category_id)
                .map(|n| n.to_string())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            description: item.description.clone(),
            acquired_on: item.acquired_on,
            status: item.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_build_rows_resolves_names_in_order() {
        let computers = Category::new("Computers");
        let items = vec![
            Item::new(ItemUid::new(1002), computers.id, "Laptop", date(2024, 1, 1)),
            Item::new(ItemUid::new(1001), computers.id, "Desktop", date(2023, 5, 2)),
        ];

        let rows = build_rows(&items, &[computers]);
        assert_eq!(rows.len(), 2);
        // Input order preserved, no re-sort
        assert_eq!(rows[0].uid, ItemUid::new(1002));
        assert_eq!(rows[0].category, "Computers");
        assert_eq!(rows[1].year(), 2023);
    }

    #[test]
    fn test_build_rows_dangling_category() {
        let item = Item::new(ItemUid::new(1001), CategoryId::new(), "Orphan", date(2024, 1, 1));
        let rows = build_rows(&[item], &[]);
        assert_eq!(rows[0].category, UNKNOWN_CATEGORY);
    }
}
