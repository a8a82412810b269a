//! Storage initialization
//!
//! Handles first-run setup and the default category set

use crate::config::paths::FinancePaths;
use crate::error::FinanceError;
use crate::models::category::default_categories;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the data directory and seeds the default categories. Existing data
/// is never touched.
pub fn initialize_storage(paths: &FinancePaths) -> Result<(), FinanceError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

fn create_default_categories(paths: &FinancePaths) -> Result<(), FinanceError> {
    let data = CategoryData {
        categories: default_categories(),
    };
    write_json_atomic(paths.categories_file(), &data)?;

    tracing::info!(
        count = data.categories.len(),
        path = %paths.categories_file().display(),
        "seeded default categories"
    );
    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &FinancePaths) -> bool {
    !paths.is_initialized()
}
