//! Import of a full data export
//!
//! The payload is validated and prepared in full before any repository is
//! touched. With `replace_existing` every stored entity is discarded first;
//! otherwise imported entities are merged into the stores by id.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, TransactionType};
use crate::storage::Storage;

use super::json::FullExport;

/// Counts of what an import wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub transactions: usize,
    pub categories: usize,
    pub recurring_expenses: usize,
    /// Imported categories folded into an existing category of the same name
    pub categories_merged: usize,
    /// Transactions and recurring expenses linked to a category by name
    pub linked_by_name: usize,
    pub replaced_existing: bool,
}

/// Apply an export to storage
pub fn import_data(
    storage: &Storage,
    export: FullExport,
    replace_existing: bool,
) -> FinanceResult<ImportSummary> {
    export.validate().map_err(FinanceError::Import)?;

    let FullExport {
        mut transactions,
        categories: imported_categories,
        mut recurring_expenses,
        ..
    } = export;

    let mut summary = ImportSummary {
        replaced_existing: replace_existing,
        ..Default::default()
    };

    let existing = if replace_existing {
        Vec::new()
    } else {
        storage.categories.get_all()?
    };

    // Imported categories that collide by name with a stored one (different id)
    // are folded into the stored category
    let mut remap: HashMap<CategoryId, CategoryId> = HashMap::new();
    let mut categories = Vec::with_capacity(imported_categories.len());
    for category in imported_categories {
        let clash = existing
            .iter()
            .find(|c| c.id != category.id && c.kind == category.kind && c.has_name(&category.name));
        match clash {
            Some(stored) => {
                remap.insert(category.id, stored.id);
                summary.categories_merged += 1;
            }
            None => categories.push(category),
        }
    }

    let mut known: Vec<Category> = existing
        .into_iter()
        .filter(|c| !categories.iter().any(|i| i.id == c.id))
        .collect();
    known.extend(categories.iter().cloned());

    for txn in &mut transactions {
        match txn.category_id {
            Some(id) => {
                if let Some(target) = remap.get(&id) {
                    txn.category_id = Some(*target);
                }
            }
            None => {
                if let Some(category) = find_by_name(&known, &txn.category_name, txn.kind) {
                    txn.category_id = Some(category.id);
                    txn.category_name = category.name.clone();
                    summary.linked_by_name += 1;
                }
            }
        }
    }

    for expense in &mut recurring_expenses {
        match expense.category_id {
            Some(id) => {
                if let Some(target) = remap.get(&id) {
                    expense.category_id = Some(*target);
                }
            }
            None => {
                if let Some(category) =
                    find_by_name(&known, &expense.category_name, TransactionType::Expense)
                {
                    expense.category_id = Some(category.id);
                    expense.category_name = category.name.clone();
                    expense.category_color = category.color.clone();
                    summary.linked_by_name += 1;
                }
            }
        }
    }

    if replace_existing {
        storage.transactions.clear()?;
        storage.categories.clear()?;
        storage.recurring.clear()?;
    }

    summary.categories = categories.len();
    for category in categories {
        storage.categories.upsert(category)?;
    }

    summary.transactions = transactions.len();
    for txn in transactions {
        storage.transactions.upsert(txn)?;
    }

    summary.recurring_expenses = recurring_expenses.len();
    for expense in recurring_expenses {
        storage.recurring.upsert(expense)?;
    }

    storage.save_all()?;

    tracing::info!(
        transactions = summary.transactions,
        categories = summary.categories,
        recurring_expenses = summary.recurring_expenses,
        merged = summary.categories_merged,
        replace = replace_existing,
        "imported data"
    );
    Ok(summary)
}

fn find_by_name<'c>(
    categories: &'c [Category],
    name: &str,
    kind: TransactionType,
) -> Option<&'c Category> {
    if name.trim().is_empty() {
        return None;
    }
    categories.iter().find(|c| c.kind == kind && c.has_name(name))
}
