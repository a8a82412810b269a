//! Export and import of the full data set
//!
//! - CSV: transactions and recurring expenses (spreadsheet-compatible)
//! - JSON: machine-readable full export, also the import format
//! - YAML: human-readable full export

pub mod csv;
pub mod import;
pub mod json;
pub mod yaml;

pub use self::csv::{export_recurring_csv, export_transactions_csv};
pub use import::{import_data, ImportSummary};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
