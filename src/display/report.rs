//! Report summary formatting
//!
//! Renders the aggregated statistics as a terminal summary with sections
//! for status, category, and year breakdowns.

use crate::reports::InventoryStats;

/// Format the statistics summary
pub fn format_report_summary(stats: &InventoryStats) -> String {
    let mut output = String::new();

    output.push_str(&format!("Items: {}\n", stats.total));

    if stats.total == 0 {
        return output;
    }

    output.push_str("\nStatuses:\n");
    for (status, count) in &stats.by_status {
        output.push_str(&format!("  {:<12} {:>4}\n", status.to_string(), count));
    }

    output.push_str("\nBy category:\n");
    for (category, count) in &stats.by_category {
        output.push_str(&format!("  {:<20} {:>4}\n", category, count));
    }

    output.push_str("\nBy year:\n");
    for (year, count) in &stats.by_year {
        output.push_str(&format!("  {:<20} {:>4}\n", year, count));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ItemUid};
    use crate::reports::ReportRow;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_summary() {
        let stats = InventoryStats::aggregate(&[]);
        let output = format_report_summary(&stats);
        assert!(output.contains("Items: 0"));
        assert!(!output.contains("By category"));
    }

    #[test]
    fn test_summary_sections() {
        let rows = vec![
            ReportRow {
                uid: ItemUid::new(1001),
                name: "Laptop".into(),
                category: "Computers".into(),
                description: String::new(),
                acquired_on: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
                status: ItemStatus::Active,
            },
            ReportRow {
                uid: ItemUid::new(1002),
                name: "Chair".into(),
                category: "Furniture".into(),
                description: String::new(),
                acquired_on: NaiveDate::from_ymd_opt(2021, 9, 12).unwrap(),
                status: ItemStatus::WrittenOff,
            },
        ];

        let stats = InventoryStats::aggregate(&rows);
        let output = format_report_summary(&stats);
        assert!(output.contains("Items: 2"));
        assert!(output.contains("Statuses:"));
        assert!(output.contains("active"));
        assert!(output.contains("written-off"));
        assert!(output.contains("By category:"));
        assert!(output.contains("Computers"));
        assert!(output.contains("By year:"));
        assert!(output.contains("2021"));
        assert!(output.contains("2023"));
    }
}
