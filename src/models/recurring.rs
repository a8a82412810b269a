//! Recurring expense model
//!
//! A template for a bill that is paid every month on a fixed day. It is not a
//! transaction itself and never contributes to transaction totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::{Category, DEFAULT_CATEGORY_COLOR};
use super::ids::{CategoryId, RecurringExpenseId};
use super::money::Money;

const MAX_NAME_LEN: usize = 100;

/// A monthly recurring expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub id: RecurringExpenseId,

    pub name: String,

    pub amount: Money,

    #[serde(default)]
    pub description: String,

    /// Day of the month the expense falls on (1-31)
    pub day_of_month: u8,

    #[serde(default)]
    pub category_id: Option<CategoryId>,

    #[serde(rename = "category", default)]
    pub category_name: String,

    /// Snapshot of the category color when the category was assigned
    #[serde(default = "default_color")]
    pub category_color: String,

    #[serde(default = "default_active")]
    pub is_active: bool,

    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

fn default_active() -> bool {
    true
}

impl RecurringExpense {
    /// Create an active recurring expense in the given category
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        day_of_month: u8,
        category: &Category,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecurringExpenseId::new(),
            name: name.into(),
            amount,
            description: String::new(),
            day_of_month,
            category_id: Some(category.id),
            category_name: category.name.clone(),
            category_color: category.color.clone(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reassign the category, refreshing the name and color snapshots
    pub fn set_category(&mut self, category: &Category) {
        self.category_id = Some(category.id);
        self.category_name = category.name.clone();
        self.category_color = category.color.clone();
        self.touch();
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.touch();
    }

    pub fn toggle_active(&mut self) {
        self.set_active(!self.is_active);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), RecurringValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecurringValidationError::EmptyName);
        }
        if self.name.len() > MAX_NAME_LEN {
            return Err(RecurringValidationError::NameTooLong(self.name.len()));
        }
        if self.amount.is_negative() {
            return Err(RecurringValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(RecurringValidationError::AmountTooLarge(self.amount));
        }
        if !(1..=31).contains(&self.day_of_month) {
            return Err(RecurringValidationError::InvalidDay(self.day_of_month));
        }
        Ok(())
    }
}

impl fmt::Display for RecurringExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} on day {})", self.name, self.amount, self.day_of_month)
    }
}

/// Validation errors for recurring expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecurringValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount(Money),
    AmountTooLarge(Money),
    InvalidDay(u8),
}

impl fmt::Display for RecurringValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Recurring expense name cannot be empty"),
            Self::NameTooLong(len) => write!(
                f,
                "Recurring expense name too long ({} characters, max {})",
                len, MAX_NAME_LEN
            ),
            Self::NegativeAmount(amount) => write!(f, "Amount cannot be negative ({})", amount),
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::InvalidDay(day) => write!(f, "Day of month must be between 1 and 31, got {}", day),
        }
    }
}

impl std::error::Error for RecurringValidationError {}
