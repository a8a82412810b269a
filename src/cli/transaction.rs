//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use super::{parse_amount, parse_date, resolve_category, today};
use crate::config::Settings;
use crate::display::transaction::{format_grouped_view, format_transaction_details};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::reports::{CategoryIndex, GroupedView};
use crate::services::{
    CategoryService, CreateTransactionInput, TransactionFilter, TransactionService,
    UpdateTransactionInput,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction type (income or expense)
        kind: TransactionType,
        /// Amount (e.g., "12.50"); never negative
        amount: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as pending
        #[arg(long)]
        pending: bool,
    },
    /// List transactions grouped by date
    List {
        /// Filter by type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Only pending transactions
        #[arg(long, conflicts_with = "completed")]
        pending: bool,
        /// Only completed transactions
        #[arg(long)]
        completed: bool,
        /// Filter by category name or ID
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as pending
        #[arg(long, conflicts_with = "completed")]
        pending: bool,
        /// Mark as completed
        #[arg(long)]
        completed: bool,
    },
    /// Mark a pending transaction as completed
    Complete {
        /// Transaction ID
        id: String,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let category_service = CategoryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
            pending,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => today(),
            };
            let category = resolve_category(&category_service, &category, Some(kind))?;

            let txn = service.create(CreateTransactionInput {
                kind,
                amount,
                category_id: category.id,
                description,
                date,
                is_pending: pending,
            })?;

            println!("Created transaction:");
            print!(
                "{}",
                format_transaction_details(
                    &txn,
                    &category.name,
                    &category.color,
                    symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::List {
            kind,
            pending,
            completed,
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new();

            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if pending {
                filter = filter.pending(true);
            } else if completed {
                filter = filter.pending(false);
            }
            if let Some(cat) = &category {
                let cat = resolve_category(&category_service, cat, kind)?;
                filter = filter.category(cat.id);
            }
            if let Some(from_str) = from {
                filter.start_date = Some(parse_date(&from_str)?);
            }
            if let Some(to_str) = to {
                filter.end_date = Some(parse_date(&to_str)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let transactions = service.list(filter)?;
            let categories = category_service.list()?;
            let index =
                CategoryIndex::new(&categories).with_fallback_color(&settings.default_category_color);
            let view = GroupedView::compute_with_index(&transactions, &index);

            print!("{}", format_grouped_view(&view, today(), symbol));
            if !transactions.is_empty() {
                println!("\nShowing {} transactions", transactions.len());
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;

            let categories = category_service.list()?;
            let index =
                CategoryIndex::new(&categories).with_fallback_color(&settings.default_category_color);

            print!(
                "{}",
                format_transaction_details(
                    &txn,
                    index.name_for(&txn),
                    index.color_for(&txn),
                    symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::Edit {
            id,
            kind,
            amount,
            category,
            description,
            date,
            pending,
            completed,
        } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;

            let category_id = match category {
                Some(cat) => {
                    let target_kind = kind.unwrap_or(txn.kind);
                    Some(resolve_category(&category_service, &cat, Some(target_kind))?.id)
                }
                None => None,
            };

            let input = UpdateTransactionInput {
                kind,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                category_id,
                description,
                date: date.as_deref().map(parse_date).transpose()?,
                is_pending: if pending {
                    Some(true)
                } else if completed {
                    Some(false)
                } else {
                    None
                },
            };

            if input.is_empty() {
                println!("Nothing to change. See 'finance transaction edit --help'.");
                return Ok(());
            }

            let updated = service.update(txn.id, input)?;
            let categories = category_service.list()?;
            let index =
                CategoryIndex::new(&categories).with_fallback_color(&settings.default_category_color);

            println!("Updated transaction:");
            print!(
                "{}",
                format_transaction_details(
                    &updated,
                    index.name_for(&updated),
                    index.color_for(&updated),
                    symbol,
                    &settings.date_format
                )
            );
        }

        TransactionCommands::Complete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;

            if !txn.is_pending {
                println!("Transaction {} is already completed", txn.id);
                return Ok(());
            }

            let completed = service.complete(txn.id)?;
            println!(
                "Completed transaction: {} ({}{})",
                completed.id,
                completed.kind.sign(),
                completed.amount.format_with_symbol(symbol)
            );
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| FinanceError::transaction_not_found(&id))?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:     {}", txn.date);
                println!(
                    "  Amount:   {}{}",
                    txn.kind.sign(),
                    txn.amount.format_with_symbol(symbol)
                );
                println!("  Category: {}", txn.category_name);
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(txn.id)?;
            println!("Deleted transaction: {} ({})", deleted.id, deleted.date);
        }
    }

    Ok(())
}
