//! Recurring expense display formatting

use crate::models::RecurringExpense;
use crate::reports::MonthlyRecurringSummary;

/// Message shown when no recurring expenses exist
pub const EMPTY_RECURRING_MESSAGE: &str =
    "No recurring expenses yet. Add one with 'finance recurring add'.";

/// Format the monthly total line
pub fn format_monthly_total(summary: &MonthlyRecurringSummary, symbol: &str) -> String {
    format!(
        "Total Monthly: {} ({} active)",
        summary.monthly_total.format_with_symbol(symbol),
        summary.count
    )
}

/// Format one recurring expense as a two-line entry
pub fn format_recurring_entry(expense: &RecurringExpense, symbol: &str) -> String {
    let inactive = if expense.is_active { "" } else { " [Inactive]" };
    let description = if expense.description.is_empty() {
        "No description"
    } else {
        expense.description.as_str()
    };

    format!(
        "  {} ({} {}){}  {}\n    {}  {}",
        expense.name,
        expense.category_name,
        expense.category_color,
        inactive,
        expense.amount.format_with_symbol(symbol),
        description,
        format_day(expense.day_of_month)
    )
}

pub fn format_day(day_of_month: u8) -> String {
    format!("Day {} of each month", day_of_month)
}

/// Format the recurring expense list with its monthly total header
pub fn format_recurring_list(
    expenses: &[RecurringExpense],
    summary: &MonthlyRecurringSummary,
    symbol: &str,
) -> String {
    let mut output = String::new();
    output.push_str("Recurring Expenses\n");

    if expenses.is_empty() {
        output.push_str(EMPTY_RECURRING_MESSAGE);
        output.push('\n');
        return output;
    }

    output.push_str(&format_monthly_total(summary, symbol));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_recurring_entry(expense, symbol));
        output.push('\n');
    }

    output
}

/// Format recurring expense details for display
pub fn format_recurring_details(expense: &RecurringExpense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Recurring:   {}\n", expense.name));
    output.push_str(&format!("ID:          {}\n", expense.id));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Schedule:    {}\n", format_day(expense.day_of_month)));
    output.push_str(&format!(
        "Category:    {} ({})\n",
        expense.category_name, expense.category_color
    ));
    if !expense.description.is_empty() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }
    output.push_str(&format!(
        "Status:      {}\n",
        if expense.is_active { "Active" } else { "Inactive" }
    ));

    output
}
