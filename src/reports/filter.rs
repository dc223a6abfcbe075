//! Filter engine
//!
//! A set of optional criteria combined with logical AND. Absent criteria
//! impose no constraint, so the empty filter matches everything. Filtering
//! is a pure function and preserves input order.

use crate::models::{CategoryId, Item, ItemStatus};

/// Optional criteria narrowing the item list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Only items in this category
    pub category: Option<CategoryId>,

    /// Only items acquired in this calendar year
    pub year: Option<i32>,

    /// Only items with this status
    pub status: Option<ItemStatus>,

    /// Case-insensitive substring over name and description
    pub text: Option<String>,
}

impl ItemFilter {
    /// A filter with no criteria; matches every item
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.year.is_none()
            && self.status.is_none()
            && self.text.as_deref().map_or(true, |t| t.trim().is_empty())
    }

    /// Whether an item satisfies every specified criterion
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(category) = self.category {
            if item.category_id != category {
                return false;
            }
        }

        if let Some(year) = self.year {
            if item.year() != year {
                return false;
            }
        }

        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }

        if let Some(text) = self.text.as_deref() {
            let needle = text.trim().to_lowercase();
            if !needle.is_empty() {
                let in_name = item.name.to_lowercase().contains(&needle);
                let in_description = item.description.to_lowercase().contains(&needle);
                if !in_name && !in_description {
                    return false;
                }
            }
        }

        true
    }
}

/// Select the items matching the filter, preserving input order
pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

/// Owned variant of [`filter_items`] for callers that go on to mutate or
/// export the selection
pub fn filter_items_owned(items: &[Item], filter: &ItemFilter) -> Vec<Item> {
    items
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemUid;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fixture() -> (CategoryId, CategoryId, Vec<Item>) {
        let cat_a = CategoryId::new();
        let cat_b = CategoryId::new();

        let mut laptop = Item::new(ItemUid::new(1001), cat_a, "Lenovo ThinkPad", date(2020, 3, 1));
        laptop.description = "Ryzen 7, 16GB".into();

        let mut chair = Item::new(ItemUid::new(1002), cat_b, "Ergonomic chair", date(2021, 5, 30));
        chair.status = crate::models::ItemStatus::WrittenOff;

        let printer = Item::new(ItemUid::new(1003), cat_a, "HP LaserJet", date(2021, 10, 5));

        (cat_a, cat_b, vec![laptop, chair, printer])
    }

    #[test]
    fn test_empty_filter_returns_all_in_order() {
        let (_, _, items) = fixture();
        let filter = ItemFilter::none();
        assert!(filter.is_empty());

        let result = filter_items(&items, &filter);
        assert_eq!(result.len(), 3);
        let uids: Vec<u32> = result.iter().map(|i| i.uid.value()).collect();
        assert_eq!(uids, vec![1001, 1002, 1003]);
    }

    #[test]
    fn test_category_filter() {
        let (cat_a, _, items) = fixture();
        let filter = ItemFilter {
            category: Some(cat_a),
            ..Default::default()
        };

        let result = filter_items(&items, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|i| i.category_id == cat_a));
    }

    #[test]
    fn test_year_filter() {
        let (_, _, items) = fixture();
        let filter = ItemFilter {
            year: Some(2021),
            ..Default::default()
        };

        let result = filter_items(&items, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|i| i.year() == 2021));

        let none = filter_items(
            &items,
            &ItemFilter {
                year: Some(1999),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_status_filter() {
        let (_, _, items) = fixture();
        let filter = ItemFilter {
            status: Some(ItemStatus::Active),
            ..Default::default()
        };

        let result = filter_items(&items, &filter);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|i| i.status == ItemStatus::Active));
    }

    #[test]
    fn test_text_filter_searches_name_and_description() {
        let (_, _, items) = fixture();

        // Matches the name, case-insensitively
        let by_name = filter_items(
            &items,
            &ItemFilter {
                text: Some("laserjet".into()),
                ..Default::default()
            },
        );
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].uid, ItemUid::new(1003));

        // Matches only the description
        let by_description = filter_items(
            &items,
            &ItemFilter {
                text: Some("ryzen".into()),
                ..Default::default()
            },
        );
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].uid, ItemUid::new(1001));

        // Whitespace-only text imposes no constraint
        let blank = ItemFilter {
            text: Some("   ".into()),
            ..Default::default()
        };
        assert!(blank.is_empty());
        assert_eq!(filter_items(&items, &blank).len(), 3);
    }

    #[test]
    fn test_criteria_combine_with_and() {
        let (cat_a, _, items) = fixture();
        let filter = ItemFilter {
            category: Some(cat_a),
            year: Some(2021),
            status: Some(ItemStatus::Active),
            text: None,
        };

        let result = filter_items(&items, &filter);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].uid, ItemUid::new(1003));

        // Tightening any one criterion to a mismatch excludes everything
        let no_match = ItemFilter {
            status: Some(ItemStatus::WrittenOff),
            ..filter
        };
        assert!(filter_items(&items, &no_match).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let (_, _, items) = fixture();
        let before: Vec<u32> = items.iter().map(|i| i.uid.value()).collect();

        let _ = filter_items_owned(
            &items,
            &ItemFilter {
                status: Some(ItemStatus::Active),
                ..Default::default()
            },
        );

        let after: Vec<u32> = items.iter().map(|i| i.uid.value()).collect();
        assert_eq!(before, after);
    }
}
