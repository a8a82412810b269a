//! Id-keyed category lookup
//!
//! Built once per view so resolving a transaction's category is a hash lookup
//! rather than a scan of the category list.

use std::collections::HashMap;

use crate::models::{Category, CategoryId, Transaction, DEFAULT_CATEGORY_COLOR};

/// Read-only index from category id to category
#[derive(Debug, Clone)]
pub struct CategoryIndex<'a> {
    by_id: HashMap<CategoryId, &'a Category>,
    fallback_color: String,
}

impl<'a> CategoryIndex<'a> {
    pub fn new(categories: &'a [Category]) -> Self {
        Self {
            by_id: categories.iter().map(|c| (c.id, c)).collect(),
            fallback_color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }

    /// Use a different color for unresolved categories
    pub fn with_fallback_color(mut self, color: impl Into<String>) -> Self {
        self.fallback_color = color.into();
        self
    }

    pub fn get(&self, id: CategoryId) -> Option<&'a Category> {
        self.by_id.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Color for an optional category reference
    pub fn color_of(&self, category_id: Option<CategoryId>) -> &str {
        category_id
            .and_then(|id| self.get(id))
            .map(|c| c.color.as_str())
            .unwrap_or(self.fallback_color.as_str())
    }

    pub fn color_for(&self, txn: &Transaction) -> &str {
        self.color_of(txn.category_id)
    }

    /// Current category name, or the name recorded on the transaction if the
    /// category has since been deleted
    pub fn name_for<'t>(&self, txn: &'t Transaction) -> &'t str
    where
        'a: 't,
    {
        match txn.category_id.and_then(|id| self.get(id)) {
            Some(category) => category.name.as_str(),
            None => txn.category_name.as_str(),
        }
    }
}
