//! Consistent read of every entity list
//!
//! A view is built from transactions, categories and recurring expenses read
//! together. If any of the three cannot be read, no snapshot is produced;
//! [`Storage::load_all`] gives the same guarantee for the files on disk.

use crate::error::FinanceResult;
use crate::models::{Category, RecurringExpense, Transaction};
use crate::reports::{CategoryIndex, GroupedView, MonthlyRecurringSummary, Summary};
use crate::storage::Storage;

/// All entity lists as of one read
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub transactions: Vec<Transaction>,
    pub categories: Vec<Category>,
    pub recurring_expenses: Vec<RecurringExpense>,
}

impl Snapshot {
    /// Read the lists currently held by the repositories
    pub fn load(storage: &Storage) -> FinanceResult<Self> {
        let transactions = storage.transactions.get_all()?;
        let categories = storage.categories.get_all()?;
        let recurring_expenses = storage.recurring.get_all()?;

        Ok(Self {
            transactions,
            categories,
            recurring_expenses,
        })
    }

    pub fn category_index(&self) -> CategoryIndex<'_> {
        CategoryIndex::new(&self.categories)
    }

    pub fn summary(&self) -> Summary {
        Summary::compute(&self.transactions)
    }

    /// Transactions grouped by date, unresolved categories shown in `fallback_color`
    pub fn grouped(&self, fallback_color: &str) -> GroupedView {
        let index = self.category_index().with_fallback_color(fallback_color);
        GroupedView::compute_with_index(&self.transactions, &index)
    }

    pub fn monthly_recurring(&self) -> MonthlyRecurringSummary {
        MonthlyRecurringSummary::compute(&self.recurring_expenses)
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
            && self.categories.is_empty()
            && self.recurring_expenses.is_empty()
    }
}
