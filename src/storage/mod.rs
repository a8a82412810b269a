//! Storage layer for the finance tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each repository owns one file under `<base>/data/`.

pub mod categories;
pub mod file_io;
pub mod init;
pub mod recurring;
pub mod transactions;

pub use categories::CategoryRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use recurring::RecurringExpenseRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinancePaths,
    pub transactions: TransactionRepository,
    pub categories: CategoryRepository,
    pub recurring: RecurringExpenseRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinancePaths) -> Result<Self, FinanceError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: TransactionRepository::new(paths.transactions_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            recurring: RecurringExpenseRepository::new(paths.recurring_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Every file is read before anything in memory changes, so a bad file
    /// leaves the previously loaded data in place.
    pub fn load_all(&mut self) -> Result<(), FinanceError> {
        let transactions = self.transactions.read_file()?;
        let categories = self.categories.read_file()?;
        let recurring = self.recurring.read_file()?;

        self.transactions.replace_all(transactions)?;
        self.categories.replace_all(categories)?;
        self.recurring.replace_all(recurring)?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinanceError> {
        self.transactions.save()?;
        self.categories.save()?;
        self.recurring.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (default categories written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_after_init() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert!(storage.is_initialized());
        assert!(storage.categories.count().unwrap() > 0);
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.recurring.count().unwrap(), 0);
    }

    #[test]
    fn test_failed_load_keeps_previous_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        initialize_storage(&paths).unwrap();

        let mut storage = Storage::new(paths.clone()).unwrap();
        storage.load_all().unwrap();
        let categories_before = storage.categories.count().unwrap();

        let txn = Transaction::new(
            TransactionType::Income,
            Money::from_cents(1000),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        storage.transactions.upsert(txn).unwrap();
        storage.transactions.save().unwrap();
        storage.transactions.clear().unwrap();

        // Transactions on disk are fine, categories are not
        std::fs::write(paths.categories_file(), "{ not json").unwrap();

        assert!(storage.load_all().is_err());
        assert_eq!(storage.transactions.count().unwrap(), 0);
        assert_eq!(storage.categories.count().unwrap(), categories_before);
    }
}
