//! Recurring expense service
//!
//! CRUD for monthly recurring expenses, the active toggle and the monthly
//! total.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, CategoryId, Money, RecurringExpense, RecurringExpenseId, TransactionType};
use crate::reports::MonthlyRecurringSummary;
use crate::storage::Storage;

/// Service for recurring expense management
pub struct RecurringExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for creating a recurring expense
#[derive(Debug, Clone)]
pub struct CreateRecurringInput {
    pub name: String,
    pub amount: Money,
    pub day_of_month: u8,
    pub category_id: CategoryId,
    pub description: Option<String>,
}

/// Partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateRecurringInput {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub day_of_month: Option<u8>,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl<'a> RecurringExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new recurring expense
    pub fn create(&self, input: CreateRecurringInput) -> FinanceResult<RecurringExpense> {
        let category = self.expense_category(input.category_id)?;

        let mut expense = RecurringExpense::new(
            input.name.trim(),
            input.amount,
            input.day_of_month,
            &category,
        );
        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }

        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.recurring.upsert(expense.clone())?;
        self.storage.recurring.save()?;

        tracing::info!(
            id = %expense.id,
            name = %expense.name,
            amount = %expense.amount,
            day = expense.day_of_month,
            "created recurring expense"
        );
        Ok(expense)
    }

    pub fn get(&self, id: RecurringExpenseId) -> FinanceResult<Option<RecurringExpense>> {
        self.storage.recurring.get(id)
    }

    /// Find a recurring expense by ID string or exact name (case-insensitive)
    pub fn find(&self, identifier: &str) -> FinanceResult<Option<RecurringExpense>> {
        let all = self.storage.recurring.get_all()?;

        let mut matches: Vec<_> = all
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(identifier.trim()))
            .cloned()
            .collect();
        if matches.is_empty() {
            matches = all.into_iter().filter(|e| e.id.matches(identifier)).collect();
        }

        match matches.len() {
            0 | 1 => Ok(matches.pop()),
            n => Err(FinanceError::Validation(format!(
                "'{}' matches {} recurring expenses; use the id instead",
                identifier, n
            ))),
        }
    }

    /// List all recurring expenses ordered by day of month
    pub fn list(&self) -> FinanceResult<Vec<RecurringExpense>> {
        self.storage.recurring.get_all()
    }

    /// Update a recurring expense
    pub fn update(
        &self,
        id: RecurringExpenseId,
        input: UpdateRecurringInput,
    ) -> FinanceResult<RecurringExpense> {
        let mut expense = self
            .storage
            .recurring
            .get(id)?
            .ok_or_else(|| FinanceError::recurring_not_found(id.to_string()))?;

        if let Some(category_id) = input.category_id {
            let category = self.expense_category(category_id)?;
            expense.set_category(&category);
        }
        if let Some(name) = input.name {
            expense.name = name.trim().to_string();
        }
        if let Some(amount) = input.amount {
            expense.amount = amount;
        }
        if let Some(day) = input.day_of_month {
            expense.day_of_month = day;
        }
        if let Some(description) = input.description {
            expense.description = description.trim().to_string();
        }
        if let Some(active) = input.is_active {
            expense.is_active = active;
        }

        expense.touch();
        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.recurring.upsert(expense.clone())?;
        self.storage.recurring.save()?;

        tracing::info!(id = %expense.id, name = %expense.name, "updated recurring expense");
        Ok(expense)
    }

    /// Flip the active flag
    pub fn toggle_active(&self, id: RecurringExpenseId) -> FinanceResult<RecurringExpense> {
        let mut expense = self
            .storage
            .recurring
            .get(id)?
            .ok_or_else(|| FinanceError::recurring_not_found(id.to_string()))?;

        expense.toggle_active();
        self.storage.recurring.upsert(expense.clone())?;
        self.storage.recurring.save()?;

        tracing::info!(id = %expense.id, active = expense.is_active, "toggled recurring expense");
        Ok(expense)
    }

    pub fn delete(&self, id: RecurringExpenseId) -> FinanceResult<RecurringExpense> {
        let expense = self
            .storage
            .recurring
            .delete(id)?
            .ok_or_else(|| FinanceError::recurring_not_found(id.to_string()))?;
        self.storage.recurring.save()?;

        tracing::info!(id = %expense.id, name = %expense.name, "deleted recurring expense");
        Ok(expense)
    }

    /// Total and count of the active recurring expenses
    pub fn monthly_summary(&self) -> FinanceResult<MonthlyRecurringSummary> {
        let expenses = self.storage.recurring.get_all()?;
        Ok(MonthlyRecurringSummary::compute(&expenses))
    }

    fn expense_category(&self, id: CategoryId) -> FinanceResult<Category> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| FinanceError::category_not_found(id.to_string()))?;

        if category.kind != TransactionType::Expense {
            return Err(FinanceError::Validation(format!(
                "Recurring expenses need an expense category; '{}' is an income category",
                category.name
            )));
        }
        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinancePaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage, Category) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let utilities = Category::with_color("Utilities", TransactionType::Expense, "#0ea5e9");
        storage.categories.upsert(utilities.clone()).unwrap();
        (temp_dir, storage, utilities)
    }

    fn input(name: &str, cents: i64, day: u8, category: &Category) -> CreateRecurringInput {
        CreateRecurringInput {
            name: name.to_string(),
            amount: Money::from_cents(cents),
            day_of_month: day,
            category_id: category.id,
            description: None,
        }
    }

    #[test]
    fn test_create_snapshots_category_color() {
        let (_temp_dir, storage, utilities) = create_test_storage();
        let service = RecurringExpenseService::new(&storage);

        let expense = service.create(input("Internet", 4999, 5, &utilities)).unwrap();
        assert_eq!(expense.category_color, "#0ea5e9");
        assert_eq!(expense.category_name, "Utilities");
        assert!(expense.is_active);
    }

    #[test]
    fn test_create_rejects_income_category() {
        let (_temp_dir, storage, _utilities) = create_test_storage();
        let salary = Category::new("Salary", TransactionType::Income);
        storage.categories.upsert(salary.clone()).unwrap();
        let service = RecurringExpenseService::new(&storage);

        let err = service.create(input("Oops", 100, 1, &salary)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_create_rejects_bad_day() {
        let (_temp_dir, storage, utilities) = create_test_storage();
        let service = RecurringExpenseService::new(&storage);

        assert!(service.create(input("Rent", 100, 0, &utilities)).is_err());
        assert!(service.create(input("Rent", 100, 32, &utilities)).is_err());
        assert!(service.create(input("Rent", 100, 31, &utilities)).is_ok());
    }

    #[test]
    fn test_toggle_and_monthly_summary() {
        let (_temp_dir, storage, utilities) = create_test_storage();
        let service = RecurringExpenseService::new(&storage);

        service.create(input("A", 5000, 1, &utilities)).unwrap();
        let b = service.create(input("B", 2000, 2, &utilities)).unwrap();
        service.create(input("C", 3000, 3, &utilities)).unwrap();

        let toggled = service.toggle_active(b.id).unwrap();
        assert!(!toggled.is_active);

        let summary = service.monthly_summary().unwrap();
        assert_eq!(summary.monthly_total.cents(), 8000);
        assert_eq!(summary.count, 2);

        assert!(service.toggle_active(b.id).unwrap().is_active);
        assert_eq!(service.monthly_summary().unwrap().count, 3);
    }

    #[test]
    fn test_update_refreshes_color_on_category_change() {
        let (_temp_dir, storage, utilities) = create_test_storage();
        let housing = Category::with_color("Housing", TransactionType::Expense, "#6366f1");
        storage.categories.upsert(housing.clone()).unwrap();
        let service = RecurringExpenseService::new(&storage);

        let expense = service.create(input("Rent", 120000, 1, &utilities)).unwrap();
        let updated = service
            .update(
                expense.id,
                UpdateRecurringInput {
                    category_id: Some(housing.id),
                    day_of_month: Some(28),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.category_color, "#6366f1");
        assert_eq!(updated.day_of_month, 28);
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp_dir, storage, utilities) = create_test_storage();
        let service = RecurringExpenseService::new(&storage);

        let expense = service.create(input("Gym", 3000, 10, &utilities)).unwrap();
        assert_eq!(service.find("gym").unwrap().unwrap().id, expense.id);
        assert_eq!(
            service.find(&expense.id.to_string()).unwrap().unwrap().id,
            expense.id
        );

        service.delete(expense.id).unwrap();
        assert!(service.list().unwrap().is_empty());
        assert!(service.toggle_active(expense.id).unwrap_err().is_not_found());
    }
}
