//! Aggregation over transactions and recurring expenses
//!
//! Everything here is a pure function of its inputs: callers pass in the lists
//! they loaded and get derived values back. Nothing is cached between calls.

pub mod category_index;
pub mod grouping;
pub mod recurring;
pub mod summary;

pub use category_index::CategoryIndex;
pub use grouping::{compute_grouping, DateGroup, GroupedEntry, GroupedView};
pub use recurring::{compute_monthly_recurring_summary, MonthlyRecurringSummary};
pub use summary::{compute_summary, Summary};
