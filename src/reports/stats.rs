//! Statistics aggregator
//!
//! Counts a set of report rows by status, category, and acquisition year.
//! Each grouping covers every row exactly once, so its counts sum to the
//! row count. Ordered maps keep the output deterministic.

use std::collections::BTreeMap;

use crate::models::ItemStatus;

use super::ReportRow;

/// Aggregated counts over a set of report rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Count per lifecycle status
    pub by_status: BTreeMap<ItemStatus, usize>,

    /// Count per category name
    pub by_category: BTreeMap<String, usize>,

    /// Count per acquisition year
    pub by_year: BTreeMap<i32, usize>,

    /// Total number of rows aggregated
    pub total: usize,
}

impl InventoryStats {
    /// Aggregate a set of report rows
    pub fn aggregate(rows: &[ReportRow]) -> Self {
        let mut stats = Self::default();
        stats.total = rows.len();

        for row in rows {
            *stats.by_status.entry(row.status).or_insert(0) += 1;
            *stats.by_category.entry(row.category.clone()).or_insert(0) += 1;
            *stats.by_year.entry(row.year()).or_insert(0) += 1;
        }

        stats
    }

    /// Count for one status, zero if absent
    pub fn status_count(&self, status: ItemStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}
