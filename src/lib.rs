//! Finance Tracker - personal income and expense tracking
//!
//! This library records income and expense transactions, labels them with
//! categories, keeps a list of monthly recurring expenses and derives the
//! summary figures and date-grouped views shown by the `finance` binary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Transactions, categories, recurring expenses, money and ids
//! - `reports`: Pure aggregation (summary, date grouping, monthly recurring total)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `export`: JSON/YAML/CSV export and JSON/YAML import
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_tracker::config::FinancePaths;
//! use finance_tracker::services::Snapshot;
//! use finance_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(FinancePaths::new()?)?;
//! storage.load_all()?;
//! let summary = Snapshot::load(&storage)?.summary();
//! println!("Balance: {}", summary.balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
