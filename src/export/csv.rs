//! CSV Export functionality
//!
//! Exports transactions and recurring expenses to spreadsheet-friendly CSV.

use std::io::Write;

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::CategoryIndex;
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Type")]
    kind: &'static str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Pending")]
    pending: bool,
}

#[derive(Serialize)]
struct RecurringRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Day")]
    day_of_month: u8,
    #[serde(rename = "Active")]
    active: bool,
}

/// Export all transactions to CSV, newest first
///
/// Category names are resolved through the current categories, falling back
/// to the name recorded on the transaction.
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let categories = storage.categories.get_all()?;
    let index = CategoryIndex::new(&categories);
    let transactions = storage.transactions.get_all()?;

    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for txn in &transactions {
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.as_uuid().to_string(),
                date: txn.date.format("%Y-%m-%d").to_string(),
                kind: txn.kind.as_str(),
                category: index.name_for(txn),
                description: &txn.description,
                amount: txn.amount.to_decimal_string(),
                pending: txn.is_pending,
            })
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    tracing::debug!(rows = transactions.len(), "wrote transactions csv");
    Ok(())
}

/// Export recurring expenses to CSV, ordered by day of month
pub fn export_recurring_csv<W: Write>(storage: &Storage, writer: W) -> FinanceResult<()> {
    let expenses = storage.recurring.get_all()?;

    let mut csv_writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for expense in &expenses {
        csv_writer
            .serialize(RecurringRow {
                id: expense.id.as_uuid().to_string(),
                name: &expense.name,
                category: &expense.category_name,
                description: &expense.description,
                amount: expense.amount.to_decimal_string(),
                day_of_month: expense.day_of_month,
                active: expense.is_active,
            })
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::{Category, Money, RecurringExpense, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_transactions_csv() {
        let (_temp_dir, storage) = create_test_storage();

        let food = Category::new("Food", TransactionType::Expense);
        storage.categories.upsert(food.clone()).unwrap();
        let txn = Transaction::with_details(
            TransactionType::Expense,
            Money::from_cents(1234),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            &food,
            "Lunch, with friends",
        );
        storage.transactions.upsert(txn).unwrap();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();

        let mut lines = csv_string.lines();
        assert_eq!(
            lines.next(),
            Some("ID,Date,Type,Category,Description,Amount,Pending")
        );
        let row = lines.next().unwrap();
        assert!(row.contains("2025-01-15,expense,Food,\"Lunch, with friends\",12.34,false"));
    }

    #[test]
    fn test_export_empty_has_no_rows() {
        let (_temp_dir, storage) = create_test_storage();

        let mut csv_output = Vec::new();
        export_transactions_csv(&storage, &mut csv_output).unwrap();
        assert!(String::from_utf8(csv_output).unwrap().trim().is_empty());
    }

    #[test]
    fn test_export_recurring_csv() {
        let (_temp_dir, storage) = create_test_storage();
        let bills = Category::new("Bills", TransactionType::Expense);
        let mut expense = RecurringExpense::new("Gym", Money::from_cents(3000), 10, &bills);
        expense.is_active = false;
        storage.recurring.upsert(expense).unwrap();

        let mut csv_output = Vec::new();
        export_recurring_csv(&storage, &mut csv_output).unwrap();
        let csv_string = String::from_utf8(csv_output).unwrap();

        assert!(csv_string.starts_with("ID,Name,Category,Description,Amount,Day,Active"));
        assert!(csv_string.contains("Gym,Bills,,30.00,10,false"));
    }
}
