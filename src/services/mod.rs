//! Service layer for the finance tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, denormalized fields and cross-entity checks.

pub mod category;
pub mod recurring;
pub mod snapshot;
pub mod transaction;

pub use category::CategoryService;
pub use recurring::{CreateRecurringInput, RecurringExpenseService, UpdateRecurringInput};
pub use snapshot::Snapshot;
pub use transaction::{
    CreateTransactionInput, TransactionFilter, TransactionService, UpdateTransactionInput,
};
