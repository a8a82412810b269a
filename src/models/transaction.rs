//! Transaction model
//!
//! A single recorded money movement. The stored amount is never negative; the
//! direction is carried by [`TransactionType`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// Direction of a money movement, shared by transactions and categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign used when showing an amount of this type (`+` income, `-` expense)
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!(
                "Unknown transaction type '{}'. Use 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: TransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Always non-negative
    pub amount: Money,

    /// Category reference; `None` if the transaction was never linked
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    /// Category name at the time it was assigned (display only)
    #[serde(rename = "category", default)]
    pub category_name: String,

    #[serde(default)]
    pub description: String,

    pub date: NaiveDate,

    #[serde(default)]
    pub is_pending: bool,

    pub created_at: DateTime<Utc>,

    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new, settled transaction without a category
    pub fn new(kind: TransactionType, amount: Money, date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            category_id: None,
            category_name: String::new(),
            description: String::new(),
            date,
            is_pending: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction linked to a category
    pub fn with_details(
        kind: TransactionType,
        amount: Money,
        date: NaiveDate,
        category: &Category,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(kind, amount, date);
        txn.category_id = Some(category.id);
        txn.category_name = category.name.clone();
        txn.description = description.into();
        txn
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with direction applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Point the transaction at a category, snapshotting its name
    pub fn set_category(&mut self, category: &Category) {
        self.category_id = Some(category.id);
        self.category_name = category.name.clone();
        self.touch();
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.is_pending = pending;
        self.touch();
    }

    /// Mark a pending transaction as settled
    pub fn complete(&mut self) {
        self.set_pending(false);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        if !self.amount.is_within_limit() {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }
        if self.description.len() > 500 {
            return Err(TransactionValidationError::DescriptionTooLong(
                self.description.len(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.category_name,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    DescriptionTooLong(usize),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => write!(
                f,
                "Amount cannot be negative ({}); use the transaction type for direction",
                amount
            ),
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX)
            }
            Self::DescriptionTooLong(len) => {
                write!(f, "Description too long ({} characters, max 500)", len)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
