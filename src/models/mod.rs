//! Core data models for the finance tracker
//!
//! Transactions, categories and recurring expenses, plus the [`Money`] and id
//! types they are built from.

pub mod category;
pub mod ids;
pub mod money;
pub mod recurring;
pub mod transaction;

pub use category::{Category, DEFAULT_CATEGORY_COLOR};
pub use ids::{CategoryId, RecurringExpenseId, TransactionId};
pub use money::Money;
pub use recurring::RecurringExpense;
pub use transaction::{Transaction, TransactionType};
