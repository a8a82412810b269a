//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the clap
//! argument parsing with the service layer.

pub mod category;
pub mod data;
pub mod recurring;
pub mod report;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use data::{handle_data_command, DataCommands};
pub use recurring::{handle_recurring_command, RecurringCommands};
pub use report::{handle_dashboard_command, handle_summary_command};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, TransactionType};
use crate::services::CategoryService;

/// Parse a user-supplied amount; negative values are rejected
pub(crate) fn parse_amount(input: &str) -> FinanceResult<Money> {
    let amount = Money::parse(input).map_err(|e| {
        FinanceError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '12.50' or '1,200'. Error: {}",
            input, e
        ))
    })?;

    if amount.is_negative() {
        return Err(FinanceError::Validation(format!(
            "Amount cannot be negative: '{}'. Use the transaction type for direction",
            input
        )));
    }
    Ok(amount)
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(input: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Look up a category by name or id, failing if it does not exist
pub(crate) fn resolve_category(
    service: &CategoryService<'_>,
    identifier: &str,
    kind: Option<TransactionType>,
) -> FinanceResult<Category> {
    service
        .find(identifier, kind)?
        .ok_or_else(|| FinanceError::category_not_found(identifier))
}
