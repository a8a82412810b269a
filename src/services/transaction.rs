//! Transaction service
//!
//! Provides business logic for transaction management including CRUD
//! operations, pending/completed handling and the summary statistics.

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, Money, Transaction, TransactionId, TransactionType};
use crate::reports::Summary;
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by income or expense
    pub kind: Option<TransactionType>,
    /// Filter by pending flag
    pub pending: Option<bool>,
    /// Filter by category
    pub category_id: Option<CategoryId>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn pending(mut self, pending: bool) -> Self {
        self.pending = Some(pending);
        self
    }

    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn accepts(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self.pending.map_or(true, |p| txn.is_pending == p)
            && self.category_id.map_or(true, |c| txn.category_id == Some(c))
            && self.start_date.map_or(true, |d| txn.date >= d)
            && self.end_date.map_or(true, |d| txn.date <= d)
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub kind: TransactionType,
    pub amount: Money,
    pub category_id: CategoryId,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub is_pending: bool,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateTransactionInput {
    pub kind: Option<TransactionType>,
    pub amount: Option<Money>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub is_pending: Option<bool>,
}

impl UpdateTransactionInput {
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.amount.is_none()
            && self.category_id.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.is_pending.is_none()
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinanceResult<Transaction> {
        let category = self.category_for(input.category_id, input.kind)?;

        let mut txn = Transaction::with_details(
            input.kind,
            input.amount,
            input.date,
            &category,
            input.description.unwrap_or_default().trim(),
        );
        txn.is_pending = input.is_pending;

        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::info!(
            id = %txn.id,
            kind = txn.kind.as_str(),
            amount = %txn.amount,
            pending = txn.is_pending,
            "created transaction"
        );
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full ID or short display prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<Transaction>> {
        let mut matches: Vec<_> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches(identifier))
            .collect();

        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "Transaction id '{}' matches {} transactions; use more characters",
                identifier, n
            ))),
        }
    }

    /// List transactions matching the filter, keeping the repository order
    pub fn list(&self, filter: TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut transactions = self.storage.transactions.get_all()?;
        transactions.retain(|t| filter.accepts(t));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Update a transaction
    ///
    /// Changing the type or the category re-checks that the category's type
    /// matches. A transaction whose category has been deleted may still change
    /// type as long as no new category is given.
    pub fn update(
        &self,
        id: TransactionId,
        input: UpdateTransactionInput,
    ) -> FinanceResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        if let Some(kind) = input.kind {
            txn.kind = kind;
        }

        match input.category_id {
            Some(category_id) => {
                let category = self.category_for(category_id, txn.kind)?;
                txn.set_category(&category);
            }
            None if input.kind.is_some() => {
                if let Some(existing) = txn.category_id {
                    if let Some(category) = self.storage.categories.get(existing)? {
                        ensure_kind_matches(&category, txn.kind)?;
                    }
                }
            }
            None => {}
        }

        if let Some(amount) = input.amount {
            txn.amount = amount;
        }
        if let Some(description) = input.description {
            txn.description = description.trim().to_string();
        }
        if let Some(date) = input.date {
            txn.date = date;
        }
        if let Some(pending) = input.is_pending {
            txn.is_pending = pending;
        }

        txn.touch();
        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::info!(id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Mark a pending transaction as completed
    ///
    /// Completing an already settled transaction is a no-op.
    pub fn complete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let mut txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;

        if !txn.is_pending {
            return Ok(txn);
        }

        txn.complete();
        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        tracing::info!(id = %txn.id, amount = %txn.amount, "completed transaction");
        Ok(txn)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .delete(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.to_string()))?;
        self.storage.transactions.save()?;

        tracing::info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    /// Summary statistics over every stored transaction
    pub fn summary(&self) -> FinanceResult<Summary> {
        let transactions = self.storage.transactions.get_all()?;
        Ok(Summary::compute(&transactions))
    }

    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.transactions.count()
    }

    fn category_for(&self, id: CategoryId, kind: TransactionType) -> FinanceResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;
        ensure_kind_matches(&category, kind)?;
        Ok(category)
    }
}

fn ensure_kind_matches(category: &Category, kind: TransactionType) -> FinanceResult<()> {
    if category.kind != kind {
        return Err(FinanceError::Validation(format!(
            "Category '{}' is an {} category and cannot be used for {} transactions",
            category.name,
            category.kind.as_str(),
            kind.as_str()
        )));
    }
    Ok(())
}
