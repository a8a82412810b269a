//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinanceError;
use crate::models::{Category, CategoryId, TransactionType};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CategoryData {
    pub categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), FinanceError> {
        let categories = self.read_file()?;
        self.replace_all(categories)
    }

    /// Read the file without touching what is in memory
    pub fn read_file(&self) -> Result<Vec<Category>, FinanceError> {
        let file_data: CategoryData = read_json(&self.path)?;
        Ok(file_data.categories)
    }

    /// Swap the in-memory contents for `categories`
    pub fn replace_all(&self, categories: Vec<Category>) -> Result<(), FinanceError> {
        let mut stored = self
            .categories
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        stored.clear();
        for category in categories {
            stored.insert(category.id, category);
        }

        tracing::debug!(count = stored.len(), "loaded categories");
        Ok(())
    }

    pub fn save(&self) -> Result<(), FinanceError> {
        let categories = self.get_all()?;
        write_json_atomic(&self.path, &CategoryData { categories })
    }

    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, FinanceError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// All categories, income first, then by name
    pub fn get_all(&self) -> Result<Vec<Category>, FinanceError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| {
            a.kind
                .cmp(&b.kind)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(list)
    }

    pub fn get_by_type(&self, kind: TransactionType) -> Result<Vec<Category>, FinanceError> {
        let mut list = self.get_all()?;
        list.retain(|c| c.kind == kind);
        Ok(list)
    }

    /// Categories whose name matches, case-insensitively, optionally of one type
    pub fn find_by_name(
        &self,
        name: &str,
        kind: Option<TransactionType>,
    ) -> Result<Vec<Category>, FinanceError> {
        let mut list = self.get_all()?;
        list.retain(|c| c.has_name(name) && kind.map_or(true, |k| c.kind == k));
        Ok(list)
    }

    pub fn upsert(&self, category: Category) -> Result<(), FinanceError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    pub fn delete(&self, id: CategoryId) -> Result<Option<Category>, FinanceError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id))
    }

    pub fn clear(&self) -> Result<(), FinanceError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();
        Ok(())
    }

    pub fn count(&self) -> Result<usize, FinanceError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.len())
    }
}
