//! Display formatting for terminal output
//!
//! Every formatter returns a `String`; printing is left to the CLI layer.

pub mod category;
pub mod recurring;
pub mod summary;
pub mod transaction;

pub use category::{format_category_details, format_category_table};
pub use recurring::{format_recurring_details, format_recurring_list};
pub use summary::format_summary_card;
pub use transaction::{format_date_heading, format_grouped_view, format_transaction_details};
