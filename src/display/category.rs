//! Category display formatting

use crate::models::Category;

/// Format a table of categories with item counts
pub fn format_category_list(categories: &[(Category, usize)]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|(c, _)| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>5}  {}\n",
        "Name",
        "Items",
        "ID",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->5}  {:-<12}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for (category, item_count) in categories {
        output.push_str(&format!(
            "{:<width$}  {:>5}  {}\n",
            category.name,
            item_count,
            category.id,
            width = name_width
        ));
    }

    output
}

/// Format category details
pub fn format_category_details(category: &Category, item_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:          {}\n", category.id));
    output.push_str(&format!("  Items:       {}\n", item_count));

    if !category.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", category.description));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        category.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        category.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}
