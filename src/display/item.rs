//! Item display formatting
//!
//! Renders the item table the way the report exporters order it, with the
//! category name resolved per row.

use crate::reports::ReportRow;

use super::truncate;

/// Format a table of report rows
pub fn format_item_list(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "No items found.".to_string();
    }

    let name_width = rows
        .iter()
        .map(|r| truncate(&r.name, 30).len())
        .max()
        .unwrap_or(4)
        .max(4);
    let category_width = rows
        .iter()
        .map(|r| truncate(&r.category, 20).len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>5}  {:<nw$}  {:<cw$}  {:<10}  {}\n",
        "UID",
        "Name",
        "Category",
        "Date",
        "Status",
        nw = name_width,
        cw = category_width
    ));
    output.push_str(&format!(
        "{:->5}  {:-<nw$}  {:-<cw$}  {:-<10}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        nw = name_width,
        cw = category_width
    ));

    for row in rows {
        output.push_str(&format!(
            "{:>5}  {:<nw$}  {:<cw$}  {:<10}  {}\n",
            row.uid.to_string(),
            truncate(&row.name, 30),
            truncate(&row.category, 20),
            row.acquired_on.format("%Y-%m-%d"),
            row.status,
            nw = name_width,
            cw = category_width
        ));
    }

    output
}

/// Format item details
pub fn format_item_details(row: &ReportRow) -> String {
    let mut output = String::new();

    output.push_str(&format!("Item #{}: {}\n", row.uid, row.name));
    output.push_str(&format!("  Category: {}\n", row.category));
    output.push_str(&format!(
        "  Acquired: {}\n",
        row.acquired_on.format("%Y-%m-%d")
    ));
    output.push_str(&format!("  Status:   {}\n", row.status));

    if !row.description.is_empty() {
        output.push_str(&format!("  Notes:    {}\n", row.description));
    }

    output
}
