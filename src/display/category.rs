//! Category display formatting
//!
//! Categories are shown as a table; details include how many transactions
//! reference the category.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Color")]
    color: String,
}

impl From<&Category> for CategoryRow {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            kind: category.kind.to_string(),
            color: category.color.clone(),
        }
    }
}

/// Format categories as a table
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nRun 'finance init' to create default categories."
            .to_string();
    }

    let rows: Vec<CategoryRow> = categories.iter().map(CategoryRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format category details for display
pub fn format_category_details(category: &Category, transaction_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category:     {}\n", category.name));
    output.push_str(&format!("ID:           {}\n", category.id));
    output.push_str(&format!("Type:         {}\n", category.kind));
    output.push_str(&format!("Color:        {}\n", category.color));
    output.push_str(&format!("Transactions: {}\n", transaction_count));

    output
}
