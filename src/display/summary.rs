//! Summary card formatting
//!
//! The five headline figures, plus the small layout helpers shared by the
//! other views.

use crate::models::Money;
use crate::reports::Summary;

const CARD_WIDTH: usize = 40;

/// Format the summary card
pub fn format_summary_card(summary: &Summary, symbol: &str) -> String {
    let rows = [
        ("Total Income", summary.total_income),
        ("Total Expense", summary.total_expense),
        ("Balance", summary.balance),
        ("Pending", summary.total_pending),
        ("Balance + Pending", summary.balance_with_pending),
    ];

    let mut output = String::new();
    output.push_str(&format_header("Summary", CARD_WIDTH));
    output.push('\n');
    output.push_str(&separator(CARD_WIDTH));
    output.push('\n');

    for (label, amount) in rows {
        output.push_str(&format!(
            "{:<20}{:>20}\n",
            label,
            amount.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format an amount with a leading `+` for positive values
pub fn format_signed(amount: Money, symbol: &str) -> String {
    if amount.is_positive() {
        format!("+{}", amount.format_with_symbol(symbol))
    } else {
        amount.format_with_symbol(symbol)
    }
}

/// Center a title within the given width
pub fn format_header(title: &str, width: usize) -> String {
    let len = title.chars().count();
    let padding = if len >= width { 0 } else { (width - len) / 2 };
    format!("{}{}", " ".repeat(padding), title)
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
