//! Category service
//!
//! Provides business logic for category management: creation with duplicate
//! checks, lookup by id or name, and updates.

use crate::error::{FinanceError, FinanceResult};
use crate::models::category::palette_color;
use crate::models::{Category, CategoryId, TransactionType};
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    ///
    /// When no color is given, one is picked from the palette based on how many
    /// categories already exist.
    pub fn create(
        &self,
        name: &str,
        kind: TransactionType,
        color: Option<&str>,
    ) -> FinanceResult<Category> {
        let name = name.trim();

        if !self.storage.categories.find_by_name(name, Some(kind))?.is_empty() {
            return Err(FinanceError::Duplicate {
                entity_type: "Category",
                identifier: format!("{} ({})", name, kind.as_str()),
            });
        }

        let color = match color {
            Some(c) => c.trim().to_string(),
            None => palette_color(self.storage.categories.count()?).to_string(),
        };

        let category = Category::with_color(name, kind, color);
        category
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        tracing::info!(id = %category.id, name = %category.name, kind = kind.as_str(), "created category");
        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> FinanceResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by ID string or name
    ///
    /// Names are matched case-insensitively. A name shared by an income and an
    /// expense category is ambiguous unless `kind` narrows it down.
    pub fn find(
        &self,
        identifier: &str,
        kind: Option<TransactionType>,
    ) -> FinanceResult<Option<Category>> {
        let mut by_name = self.storage.categories.find_by_name(identifier, kind)?;
        match by_name.len() {
            0 => {}
            1 => return Ok(by_name.pop()),
            _ => {
                return Err(FinanceError::Validation(format!(
                    "Category name '{}' exists for both income and expense; specify a type",
                    identifier.trim()
                )))
            }
        }

        let mut by_id: Vec<_> = self
            .storage
            .categories
            .get_all()?
            .into_iter()
            .filter(|c| c.id.matches(identifier) && kind.map_or(true, |k| c.kind == k))
            .collect();

        match by_id.len() {
            0 => Ok(None),
            1 => Ok(by_id.pop()),
            _ => Err(FinanceError::Validation(format!(
                "Category id '{}' is ambiguous; use more characters",
                identifier
            ))),
        }
    }

    /// List all categories, income first
    pub fn list(&self) -> FinanceResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// List the categories of one type
    pub fn list_by_type(&self, kind: TransactionType) -> FinanceResult<Vec<Category>> {
        self.storage.categories.get_by_type(kind)
    }

    /// Rename a category or change its color
    ///
    /// Transactions keep the name recorded on them; displays resolve the
    /// current name through the category id.
    pub fn update(
        &self,
        id: CategoryId,
        name: Option<&str>,
        color: Option<&str>,
    ) -> FinanceResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;

        if let Some(new_name) = name {
            let new_name = new_name.trim();
            let clash = self
                .storage
                .categories
                .find_by_name(new_name, Some(category.kind))?
                .into_iter()
                .any(|c| c.id != id);
            if clash {
                return Err(FinanceError::Duplicate {
                    entity_type: "Category",
                    identifier: format!("{} ({})", new_name, category.kind.as_str()),
                });
            }
            category.name = new_name.to_string();
        }

        if let Some(new_color) = color {
            category.color = new_color.trim().to_string();
        }

        category
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        tracing::info!(id = %category.id, name = %category.name, "updated category");
        Ok(category)
    }

    /// Delete a category
    ///
    /// Transactions and recurring expenses that reference it are left alone and
    /// fall back to the default color when displayed.
    pub fn delete(&self, id: CategoryId) -> FinanceResult<Category> {
        let category = self
            .storage
            .categories
            .delete(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;
        self.storage.categories.save()?;

        tracing::info!(id = %category.id, name = %category.name, "deleted category");
        Ok(category)
    }

    /// Number of transactions that reference a category
    pub fn usage_count(&self, id: CategoryId) -> FinanceResult<usize> {
        Ok(self
            .storage
            .transactions
            .get_all()?
            .iter()
            .filter(|t| t.category_id == Some(id))
            .count())
    }
}
