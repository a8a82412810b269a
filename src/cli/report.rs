//! Summary and dashboard commands

use crate::config::Settings;
use crate::display::recurring::format_recurring_list;
use crate::display::summary::format_summary_card;
use crate::display::transaction::format_grouped_view;
use crate::error::{FinanceError, FinanceResult};
use crate::services::Snapshot;
use crate::storage::Storage;

use super::today;

/// Print the summary statistics
pub fn handle_summary_command(storage: &Storage, settings: &Settings, json: bool) -> FinanceResult<()> {
    let snapshot = Snapshot::load(storage)?;
    let summary = snapshot.summary();

    if json {
        let out = serde_json::to_string_pretty(&summary)
            .map_err(|e| FinanceError::Json(e.to_string()))?;
        println!("{}", out);
    } else {
        print!("{}", format_summary_card(&summary, &settings.currency_symbol));
    }

    Ok(())
}

/// Print the summary card, recent transactions and the recurring expenses
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    limit: usize,
) -> FinanceResult<()> {
    let mut snapshot = Snapshot::load(storage)?;
    let symbol = settings.currency_symbol.as_str();

    print!("{}", format_summary_card(&snapshot.summary(), symbol));
    println!();

    let recurring = snapshot.monthly_recurring();

    // Totals above cover everything; the list only shows the most recent entries
    let total = snapshot.transactions.len();
    snapshot.transactions.truncate(limit);
    println!("Recent Transactions");
    print!(
        "{}",
        format_grouped_view(
            &snapshot.grouped(&settings.default_category_color),
            today(),
            symbol
        )
    );
    if total > limit {
        println!("  ... {} more, see 'finance transaction list'", total - limit);
    }
    println!();

    print!(
        "{}",
        format_recurring_list(&snapshot.recurring_expenses, &recurring, symbol)
    );

    Ok(())
}
