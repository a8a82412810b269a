//! Transaction summary
//!
//! Firm totals cover settled transactions only. Pending transactions are netted
//! into a separate bucket: pending income adds, pending expense subtracts.

use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction, TransactionType};

/// Aggregate figures over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: Money,
    pub total_expense: Money,
    /// `total_income - total_expense`
    pub balance: Money,
    /// Net of pending transactions; may be negative
    pub total_pending: Money,
    /// `balance + total_pending`
    pub balance_with_pending: Money,
}

impl Summary {
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();

        for txn in transactions {
            match (txn.is_pending, txn.kind) {
                (true, _) => summary.total_pending += txn.signed_amount(),
                (false, TransactionType::Income) => summary.total_income += txn.amount,
                (false, TransactionType::Expense) => summary.total_expense += txn.amount,
            }
        }

        summary.balance = summary.total_income - summary.total_expense;
        summary.balance_with_pending = summary.balance + summary.total_pending;
        summary
    }
}

/// Compute the summary for a transaction list
pub fn compute_summary(transactions: &[Transaction]) -> Summary {
    Summary::compute(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(kind: TransactionType, cents: i64, pending: bool) -> Transaction {
        let mut txn = Transaction::new(
            kind,
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        );
        txn.is_pending = pending;
        txn
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(compute_summary(&[]), Summary::default());
        let summary = compute_summary(&[]);
        assert!(summary.balance_with_pending.is_zero());
    }

    #[test]
    fn test_firm_totals_exclude_pending() {
        let transactions = vec![
            txn(TransactionType::Income, 300000, false),
            txn(TransactionType::Expense, 12000, false),
            txn(TransactionType::Expense, 3000, false),
            txn(TransactionType::Income, 50000, true),
            txn(TransactionType::Expense, 20000, true),
        ];

        let summary = compute_summary(&transactions);
        assert_eq!(summary.total_income.cents(), 300000);
        assert_eq!(summary.total_expense.cents(), 15000);
        assert_eq!(summary.balance.cents(), 285000);
        assert_eq!(summary.total_pending.cents(), 30000);
        assert_eq!(summary.balance_with_pending.cents(), 315000);
    }

    #[test]
    fn test_pending_can_be_negative() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, false),
            txn(TransactionType::Expense, 2500, true),
        ];
        let summary = compute_summary(&transactions);
        assert_eq!(summary.total_pending.cents(), -2500);
        assert_eq!(summary.balance_with_pending.cents(), -1500);
    }

    #[test]
    fn test_balance_identity_holds() {
        let transactions: Vec<_> = (0..50)
            .map(|i| {
                let kind = if i % 3 == 0 {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                txn(kind, 137 * i + 1, i % 7 == 0)
            })
            .collect();

        let summary = compute_summary(&transactions);
        assert_eq!(summary.total_income - summary.total_expense, summary.balance);
        assert_eq!(
            summary.balance + summary.total_pending,
            summary.balance_with_pending
        );
    }

    #[test]
    fn test_largest_valid_amounts_sum_exactly() {
        let transactions: Vec<_> = (0..1000)
            .map(|i| {
                let kind = if i % 2 == 0 {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                txn(kind, Money::MAX.cents(), i % 5 == 0)
            })
            .collect();
        assert!(transactions.iter().all(|t| t.validate().is_ok()));

        let summary = compute_summary(&transactions);
        assert_eq!(summary.total_income.cents(), 400 * Money::MAX.cents());
        assert_eq!(summary.total_expense.cents(), 400 * Money::MAX.cents());
        assert!(summary.balance.is_zero());
        assert!(summary.total_pending.is_zero());
    }

    #[test]
    fn test_out_of_range_amounts_do_not_panic() {
        let huge = i64::MAX - 1;
        let transactions = vec![
            txn(TransactionType::Income, huge, false),
            txn(TransactionType::Income, huge, false),
            txn(TransactionType::Expense, huge, false),
            txn(TransactionType::Expense, huge, false),
            txn(TransactionType::Expense, huge, true),
            txn(TransactionType::Expense, huge, true),
        ];

        let summary = compute_summary(&transactions);
        assert_eq!(summary.total_income.cents(), i64::MAX);
        assert_eq!(summary.total_expense.cents(), i64::MAX);
        assert_eq!(summary.total_pending.cents(), i64::MIN);
        assert_eq!(summary.balance_with_pending.cents(), i64::MIN);
    }

    #[test]
    fn test_deterministic() {
        let transactions = vec![
            txn(TransactionType::Income, 1000, false),
            txn(TransactionType::Expense, 400, true),
        ];
        assert_eq!(compute_summary(&transactions), compute_summary(&transactions));
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let summary = compute_summary(&[txn(TransactionType::Income, 1050, false)]);
        let json = serde_json::to_value(summary).unwrap();
        assert_eq!(json["totalIncome"], 10.5);
        assert_eq!(json["balanceWithPending"], 10.5);
    }
}
