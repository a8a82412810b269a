//! Recurring expense repository for JSON storage
//!
//! Manages loading and saving recurring expenses to recurring.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{RecurringExpense, RecurringExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecurringData {
    recurring_expenses: Vec<RecurringExpense>,
}

/// Repository for recurring expense persistence
pub struct RecurringExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<RecurringExpenseId, RecurringExpense>>,
}

impl RecurringExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load recurring expenses from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let recurring_expenses = self.read_file()?;
        self.replace_all(recurring_expenses)
    }

    /// Read the file without touching what is in memory
    pub fn read_file(&self) -> Result<Vec<RecurringExpense>, FinanceError> {
        let file_data: RecurringData = read_json(&self.path)?;
        Ok(file_data.recurring_expenses)
    }

    /// Swap the in-memory contents for `recurring_expenses`
    pub fn replace_all(&self, recurring_expenses: Vec<RecurringExpense>) -> Result<(), FinanceError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for expense in recurring_expenses {
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "loaded recurring expenses");
        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let recurring_expenses = self.get_all()?;
        write_json_atomic(&self.path, &RecurringData { recurring_expenses })
    }

    pub fn get(&self, id: RecurringExpenseId) -> Result<Option<RecurringExpense>, FinanceError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// All entries ordered by the day of the month they fall on
    pub fn get_all(&self) -> Result<Vec<RecurringExpense>, FinanceError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = data.values().cloned().collect();
        list.sort_by(|a, b| {
            a.day_of_month
                .cmp(&b.day_of_month)
                .then_with(|| a.name.cmp(&b.name))
                .then(a.id.cmp(&b.id))
        });
        Ok(list)
    }

    pub fn upsert(&self, expense: RecurringExpense) -> Result<(), FinanceError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(expense.id, expense);
        Ok(())
    }

    pub fn delete(&self, id: RecurringExpenseId) -> Result<Option<RecurringExpense>, FinanceError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id))
    }

    pub fn clear(&self) -> Result<(), FinanceError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let data = self
            .data
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
