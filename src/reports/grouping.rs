//! Date-grouped transaction view
//!
//! Partitions transactions by calendar date, most recent date first. Within a
//! day the input order is kept. Each group carries the day's expense total,
//! pending expenses included.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::category_index::CategoryIndex;
use crate::models::{Category, Money, Transaction};

/// A transaction with its resolved display data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedEntry {
    pub transaction: Transaction,
    pub category_name: String,
    pub category_color: String,
}

/// All transactions that share one date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateGroup {
    pub date: NaiveDate,
    pub entries: Vec<GroupedEntry>,
    pub daily_expense_total: Money,
}

impl DateGroup {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            entries: Vec::new(),
            daily_expense_total: Money::zero(),
        }
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter().map(|e| &e.transaction)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Transactions grouped by date, newest date first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedView {
    pub groups: Vec<DateGroup>,
}

impl GroupedView {
    pub fn compute(transactions: &[Transaction], categories: &[Category]) -> Self {
        Self::compute_with_index(transactions, &CategoryIndex::new(categories))
    }

    pub fn compute_with_index(transactions: &[Transaction], index: &CategoryIndex<'_>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, DateGroup> = BTreeMap::new();

        for txn in transactions {
            let group = by_date
                .entry(txn.date)
                .or_insert_with(|| DateGroup::new(txn.date));

            if txn.is_expense() {
                group.daily_expense_total += txn.amount;
            }

            group.entries.push(GroupedEntry {
                category_name: index.name_for(txn).to_string(),
                category_color: index.color_for(txn).to_string(),
                transaction: txn.clone(),
            });
        }

        Self {
            groups: by_date.into_values().rev().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of transactions across all groups
    pub fn transaction_count(&self) -> usize {
        self.groups.iter().map(DateGroup::len).sum()
    }

    pub fn group_for(&self, date: NaiveDate) -> Option<&DateGroup> {
        self.groups.iter().find(|g| g.date == date)
    }
}

/// Group transactions by date, resolving category colors by id
pub fn compute_grouping(transactions: &[Transaction], categories: &[Category]) -> GroupedView {
    GroupedView::compute(transactions, categories)
}
