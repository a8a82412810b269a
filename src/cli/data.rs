//! CLI commands for data export and import

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{FinanceError, FinanceResult};
use crate::export::{csv, import, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full data set, importable)
    Json,
    /// YAML format (full data set, human-readable)
    Yaml,
    /// CSV format (transactions only)
    Csv,
    /// CSV format (recurring expenses only)
    RecurringCsv,
}

/// Data subcommands
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Export data to a file, or to stdout when no file is given
    Export {
        /// Output file path
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Import a JSON or YAML export
    Import {
        /// Input file path (.json, .yaml or .yml)
        file: PathBuf,

        /// Discard all existing data before importing
        #[arg(long)]
        replace: bool,
    },
}

/// Handle data commands
pub fn handle_data_command(storage: &Storage, cmd: DataCommands) -> FinanceResult<()> {
    match cmd {
        DataCommands::Export {
            output,
            format,
            pretty,
        } => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    FinanceError::Export(format!(
                        "Failed to create file {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                let mut writer = BufWriter::new(file);
                write_export(storage, &mut writer, format, pretty)?;
                writer
                    .flush()
                    .map_err(|e| FinanceError::Export(e.to_string()))?;
                println!("Exported {:?} data to: {}", format, path.display());
                Ok(())
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                write_export(storage, &mut writer, format, pretty)?;
                writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
                Ok(())
            }
        },
        DataCommands::Import { file, replace } => handle_import(storage, &file, replace),
    }
}

fn write_export<W: Write>(
    storage: &Storage,
    writer: &mut W,
    format: ExportFormat,
    pretty: bool,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Json => json::export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer),
        ExportFormat::Csv => csv::export_transactions_csv(storage, writer),
        ExportFormat::RecurringCsv => csv::export_recurring_csv(storage, writer),
    }
}

fn handle_import(storage: &Storage, file: &Path, replace: bool) -> FinanceResult<()> {
    let contents = std::fs::read_to_string(file).map_err(|e| {
        FinanceError::Import(format!("Failed to read {}: {}", file.display(), e))
    })?;

    let is_yaml = matches!(
        file.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let export = if is_yaml {
        yaml::import_from_yaml(&contents)?
    } else {
        json::import_from_json(&contents)?
    };

    let summary = import::import_data(storage, export, replace)?;

    if summary.replaced_existing {
        println!("Replaced existing data with {}", file.display());
    } else {
        println!("Merged {} into existing data", file.display());
    }
    println!("  Transactions:       {}", summary.transactions);
    println!("  Categories:         {}", summary.categories);
    println!("  Recurring expenses: {}", summary.recurring_expenses);
    if summary.categories_merged > 0 {
        println!(
            "  {} categories matched existing ones by name",
            summary.categories_merged
        );
    }
    if summary.linked_by_name > 0 {
        println!("  {} entries linked to a category by name", summary.linked_by_name);
    }

    Ok(())
}
