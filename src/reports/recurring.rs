//! Monthly recurring expense summary

use serde::{Deserialize, Serialize};

use crate::models::{Money, RecurringExpense};

/// Total of the active recurring expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecurringSummary {
    pub monthly_total: Money,
    /// Number of active entries
    pub count: usize,
}

impl MonthlyRecurringSummary {
    pub fn compute<'a, I>(expenses: I) -> Self
    where
        I: IntoIterator<Item = &'a RecurringExpense>,
    {
        expenses
            .into_iter()
            .filter(|e| e.is_active)
            .fold(Self::default(), |acc, e| Self {
                monthly_total: acc.monthly_total + e.amount,
                count: acc.count + 1,
            })
    }
}

pub fn compute_monthly_recurring_summary(expenses: &[RecurringExpense]) -> MonthlyRecurringSummary {
    MonthlyRecurringSummary::compute(expenses)
}
