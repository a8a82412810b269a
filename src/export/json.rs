//! JSON Export functionality
//!
//! Exports the complete data set to JSON format with schema versioning. The
//! same structure is accepted back by the importer.

use std::collections::HashSet;
use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, RecurringExpense, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullExport {
    /// Schema version for compatibility checking
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    #[serde(default = "Utc::now")]
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    #[serde(default)]
    pub app_version: String,

    #[serde(default)]
    pub transactions: Vec<Transaction>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub recurring_expenses: Vec<RecurringExpense>,

    #[serde(default)]
    pub metadata: ExportMetadata,
}

fn default_schema_version() -> String {
    EXPORT_SCHEMA_VERSION.to_string()
}

/// Export metadata for reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub recurring_expense_count: usize,
    pub pending_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Build an export from explicit lists
    pub fn new(
        transactions: Vec<Transaction>,
        categories: Vec<Category>,
        recurring_expenses: Vec<RecurringExpense>,
    ) -> Self {
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            category_count: categories.len(),
            recurring_expense_count: recurring_expenses.len(),
            pending_count: transactions.iter().filter(|t| t.is_pending).count(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            categories,
            recurring_expenses,
            metadata,
        }
    }

    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        Ok(Self::new(
            storage.transactions.get_all()?,
            storage.categories.get_all()?,
            storage.recurring.get_all()?,
        ))
    }

    /// Validate the export structure
    ///
    /// Checks the schema major version, every entity's own rules and that no
    /// id appears twice. References to categories are not required to resolve.
    pub fn validate(&self) -> Result<(), String> {
        let expected_major = EXPORT_SCHEMA_VERSION.split('.').next();
        if self.schema_version.split('.').next() != expected_major {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let mut category_ids = HashSet::new();
        let mut category_names = HashSet::new();
        for category in &self.categories {
            category
                .validate()
                .map_err(|e| format!("Category '{}': {}", category.name, e))?;
            if !category_ids.insert(category.id) {
                return Err(format!("Duplicate category id {}", category.id));
            }
            if !category_names.insert((category.name.trim().to_lowercase(), category.kind)) {
                return Err(format!(
                    "Duplicate {} category name '{}'",
                    category.kind.as_str(),
                    category.name
                ));
            }
        }

        let mut txn_ids = HashSet::new();
        for txn in &self.transactions {
            txn.validate()
                .map_err(|e| format!("Transaction {}: {}", txn.id, e))?;
            if !txn_ids.insert(txn.id) {
                return Err(format!("Duplicate transaction id {}", txn.id));
            }
        }

        let mut recurring_ids = HashSet::new();
        for expense in &self.recurring_expenses {
            expense
                .validate()
                .map_err(|e| format!("Recurring expense '{}': {}", expense.name, e))?;
            if !recurring_ids.insert(expense.id) {
                return Err(format!("Duplicate recurring expense id {}", expense.id));
            }
        }

        Ok(())
    }
}

/// Export the full data set to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> FinanceResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| FinanceError::Import(e.to_string()))?;

    export.validate().map_err(FinanceError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use crate::models::{Money, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn seed(storage: &Storage) -> Category {
        let food = Category::with_color("Food", TransactionType::Expense, "#ef4444");
        storage.categories.upsert(food.clone()).unwrap();

        let mut txn = Transaction::with_details(
            TransactionType::Expense,
            Money::from_cents(5000),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            &food,
            "Groceries",
        );
        txn.is_pending = true;
        storage.transactions.upsert(txn).unwrap();

        storage
            .recurring
            .upsert(RecurringExpense::new("Rent", Money::from_cents(120000), 1, &food))
            .unwrap();
        food
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let export = FullExport::from_storage(&storage).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.categories.len(), 1);
        assert_eq!(export.transactions.len(), 1);
        assert_eq!(export.recurring_expenses.len(), 1);
        assert_eq!(export.metadata.pending_count, 1);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2025-01-15"));
        assert!(export.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip_uses_wire_names() {
        let (_temp_dir, storage) = create_test_storage();
        seed(&storage);

        let mut json_output = Vec::new();
        export_full_json(&storage, &mut json_output, true).unwrap();
        let json_string = String::from_utf8(json_output).unwrap();

        assert!(json_string.contains("\"recurringExpenses\""));
        assert!(json_string.contains("\"isPending\": true"));
        assert!(json_string.contains("\"amount\": 50.0"));

        let imported = import_from_json(&json_string).unwrap();
        assert_eq!(imported.transactions[0].description, "Groceries");
        assert_eq!(imported.transactions[0].amount.cents(), 5000);
    }

    #[test]
    fn test_minimal_payload_defaults() {
        let imported = import_from_json(r#"{"transactions": [], "categories": []}"#).unwrap();
        assert_eq!(imported.schema_version, EXPORT_SCHEMA_VERSION);
        assert!(imported.recurring_expenses.is_empty());
    }

    #[test]
    fn test_rejects_schema_mismatch() {
        let err = import_from_json(r#"{"schemaVersion": "2.0.0"}"#).unwrap_err();
        assert!(matches!(err, FinanceError::Import(_)));
    }

    #[test]
    fn test_rejects_invalid_entity() {
        let mut export = FullExport::new(vec![], vec![], vec![]);
        export
            .categories
            .push(Category::with_color("Bad", TransactionType::Expense, "nope"));
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_category_name() {
        let export = FullExport::new(
            vec![],
            vec![
                Category::new("Food", TransactionType::Expense),
                Category::new("food", TransactionType::Expense),
            ],
            vec![],
        );
        assert!(export.validate().is_err());
    }

    fn payload_with_transaction(date: &str, amount: &str) -> String {
        format!(
            r#"{{
                "schemaVersion": "1.0.0",
                "transactions": [{{
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "type": "expense",
                    "amount": {},
                    "category": "Food",
                    "date": "{}",
                    "createdAt": "2025-01-01T00:00:00Z"
                }}]
            }}"#,
            amount, date
        )
    }

    fn import_into(storage: &Storage, json: &str) -> FinanceResult<()> {
        let export = import_from_json(json)?;
        crate::export::import::import_data(storage, export, true)?;
        Ok(())
    }

    #[test]
    fn test_well_formed_payload_imports() {
        let (_temp_dir, storage) = create_test_storage();
        import_into(&storage, &payload_with_transaction("2025-02-28", "12.5")).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 1);
    }

    #[test]
    fn test_impossible_date_rejected_and_nothing_written() {
        let (temp_dir, storage) = create_test_storage();
        seed(&storage);
        storage.save_all().unwrap();

        let payload = payload_with_transaction("2025-02-30", "12.5");
        let err = import_into(&storage, &payload).unwrap_err();
        assert!(matches!(err, FinanceError::Import(_)));

        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.transactions.count().unwrap(), 1);
        assert_eq!(reloaded.categories.count().unwrap(), 1);
        assert_eq!(reloaded.recurring.count().unwrap(), 1);
    }

    #[test]
    fn test_amounts_beyond_cents_or_limit_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        for amount in ["10.505", "1e300", "90000000000000000"] {
            let payload = payload_with_transaction("2025-01-15", amount);
            let err = import_into(&storage, &payload).unwrap_err();
            assert!(matches!(err, FinanceError::Import(_)), "amount {}", amount);
        }
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
