//! Transaction display formatting
//!
//! Renders the date-grouped transaction list and single-transaction details.

use chrono::{Duration, NaiveDate};

use crate::models::{Money, Transaction};
use crate::reports::{DateGroup, GroupedEntry, GroupedView};

/// Message shown when there is nothing to list
pub const EMPTY_LIST_MESSAGE: &str = "No transactions yet. Add your first transaction!";

/// Heading for a date group relative to `today`
///
/// "Today", "Yesterday", otherwise the long form (`Wednesday, January 15, 2025`).
pub fn format_date_heading(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if Some(date) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_string()
    } else {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

/// Amount with its direction sign (`+` income, `-` expense)
pub fn format_signed_amount(txn: &Transaction, symbol: &str) -> String {
    format!("{}{}", txn.kind.sign(), txn.amount.format_with_symbol(symbol))
}

/// Format one row of the grouped list
pub fn format_grouped_entry(entry: &GroupedEntry, symbol: &str) -> String {
    let txn = &entry.transaction;
    let badge = if txn.is_pending { "[Pending] " } else { "" };
    let description = if txn.description.is_empty() {
        String::new()
    } else {
        format!("  {}", truncate(&txn.description, 30))
    };

    format!(
        "  {}  {}{} ({}){}  {}",
        txn.id,
        badge,
        entry.category_name,
        entry.category_color,
        description,
        format_signed_amount(txn, symbol)
    )
}

/// Format one date group: heading, optional expense total, rows
pub fn format_date_group(group: &DateGroup, today: NaiveDate, symbol: &str) -> String {
    let mut output = format_date_heading(group.date, today);
    if group.daily_expense_total > Money::zero() {
        output.push_str(&format!(
            "  Total Expense: {}",
            group.daily_expense_total.format_with_symbol(symbol)
        ));
    }
    output.push('\n');

    for entry in &group.entries {
        output.push_str(&format_grouped_entry(entry, symbol));
        output.push('\n');
    }

    output
}

/// Format the whole grouped list, newest date first
pub fn format_grouped_view(view: &GroupedView, today: NaiveDate, symbol: &str) -> String {
    if view.is_empty() {
        return format!("{}\n", EMPTY_LIST_MESSAGE);
    }

    view.groups
        .iter()
        .map(|group| format_date_group(group, today, symbol))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    category_name: &str,
    category_color: &str,
    symbol: &str,
    date_format: &str,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, symbol)));
    output.push_str(&format!("Category:    {} ({})\n", category_name, category_color));

    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }

    let status = if txn.is_pending { "Pending" } else { "Completed" };
    output.push_str(&format!("Status:      {}\n", status));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M")
    ));

    output
}

/// Shorten to `max_len` characters, marking the cut with "..."
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn txn(kind: TransactionType, cents: i64, day: &str, category: &Category) -> Transaction {
        Transaction::with_details(kind, Money::from_cents(cents), date(day), category, "")
    }

    #[test]
    fn test_date_headings() {
        let today = date("2025-01-15");
        assert_eq!(format_date_heading(today, today), "Today");
        assert_eq!(format_date_heading(date("2025-01-14"), today), "Yesterday");
        assert_eq!(
            format_date_heading(date("2025-01-13"), today),
            "Monday, January 13, 2025"
        );
    }

    #[test]
    fn test_grouped_view_shows_expense_total_only_when_positive() {
        let food = Category::with_color("Food", TransactionType::Expense, "#ef4444");
        let salary = Category::with_color("Salary", TransactionType::Income, "#10b981");
        let transactions = vec![
            txn(TransactionType::Expense, 1000, "2025-01-15", &food),
            txn(TransactionType::Expense, 300, "2025-01-15", &food),
            txn(TransactionType::Income, 500000, "2025-01-14", &salary),
        ];
        let view = GroupedView::compute(&transactions, &[food, salary]);

        let output = format_grouped_view(&view, date("2025-01-15"), "$");
        assert!(output.contains("Today  Total Expense: $13.00"));
        assert!(output.contains("Yesterday\n"));
        assert!(!output.contains("Yesterday  Total Expense"));
        assert!(output.contains("Food (#ef4444)  -$10.00"));
        assert!(output.contains("Salary (#10b981)  +$5000.00"));
        assert!(output.find("Today").unwrap() < output.find("Yesterday").unwrap());
    }

    #[test]
    fn test_pending_badge_and_description() {
        let food = Category::new("Food", TransactionType::Expense);
        let mut t = txn(TransactionType::Expense, 250, "2025-01-15", &food);
        t.is_pending = true;
        t.description = "Coffee".into();
        let view = GroupedView::compute(&[t], &[food]);

        let entry = &view.groups[0].entries[0];
        let row = format_grouped_entry(entry, "$");
        assert!(row.starts_with(&format!("  {}  [Pending] Food", entry.transaction.id)));
        assert!(row.contains("Coffee"));
        assert!(row.ends_with("-$2.50"));
    }

    #[test]
    fn test_empty_view() {
        let output = format_grouped_view(&GroupedView::default(), date("2025-01-15"), "$");
        assert!(output.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_transaction_details() {
        let food = Category::new("Food", TransactionType::Expense);
        let mut t = txn(TransactionType::Expense, 5000, "2025-01-15", &food);
        t.description = "Weekly shop".into();

        let output = format_transaction_details(&t, "Food", "#6b7280", "$", "%d/%m/%Y");
        assert!(output.contains("Expense"));
        assert!(output.contains("-$50.00"));
        assert!(output.contains("Food (#6b7280)"));
        assert!(output.contains("Weekly shop"));
        assert!(output.contains("Completed"));
        assert!(output.contains("15/01/2025"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
