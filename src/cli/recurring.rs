//! Recurring expense CLI commands

use clap::Subcommand;

use super::{parse_amount, resolve_category};
use crate::config::Settings;
use crate::display::recurring::{
    format_monthly_total, format_recurring_details, format_recurring_list,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::services::{
    CategoryService, CreateRecurringInput, RecurringExpenseService, UpdateRecurringInput,
};
use crate::storage::Storage;

/// Recurring expense subcommands
#[derive(Subcommand)]
pub enum RecurringCommands {
    /// Add a monthly recurring expense
    Add {
        /// Name (e.g., "Rent")
        name: String,
        /// Monthly amount
        amount: String,
        /// Day of the month it is due (1-31)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
        day: u8,
        /// Expense category name or ID
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List recurring expenses with the monthly total
    List,
    /// Edit a recurring expense
    Edit {
        /// Name or ID
        expense: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New day of month
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
        day: Option<u8>,
        /// New expense category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Switch a recurring expense between active and inactive
    Toggle {
        /// Name or ID
        expense: String,
    },
    /// Delete a recurring expense
    Delete {
        /// Name or ID
        expense: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a recurring expense command
pub fn handle_recurring_command(
    storage: &Storage,
    settings: &Settings,
    cmd: RecurringCommands,
) -> FinanceResult<()> {
    let service = RecurringExpenseService::new(storage);
    let category_service = CategoryService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        RecurringCommands::Add {
            name,
            amount,
            day,
            category,
            description,
        } => {
            let category =
                resolve_category(&category_service, &category, Some(TransactionType::Expense))?;

            let expense = service.create(CreateRecurringInput {
                name,
                amount: parse_amount(&amount)?,
                day_of_month: day,
                category_id: category.id,
                description,
            })?;

            println!("Created recurring expense:");
            print!("{}", format_recurring_details(&expense, symbol));
        }

        RecurringCommands::List => {
            let expenses = service.list()?;
            let summary = service.monthly_summary()?;
            print!("{}", format_recurring_list(&expenses, &summary, symbol));
        }

        RecurringCommands::Edit {
            expense,
            name,
            amount,
            day,
            category,
            description,
        } => {
            let existing = service
                .find(&expense)?
                .ok_or_else(|| FinanceError::recurring_not_found(&expense))?;

            let category_id = match category {
                Some(cat) => Some(
                    resolve_category(&category_service, &cat, Some(TransactionType::Expense))?.id,
                ),
                None => None,
            };

            let updated = service.update(
                existing.id,
                UpdateRecurringInput {
                    name,
                    amount: amount.as_deref().map(parse_amount).transpose()?,
                    day_of_month: day,
                    category_id,
                    description,
                    is_active: None,
                },
            )?;

            println!("Updated recurring expense:");
            print!("{}", format_recurring_details(&updated, symbol));
        }

        RecurringCommands::Toggle { expense } => {
            let existing = service
                .find(&expense)?
                .ok_or_else(|| FinanceError::recurring_not_found(&expense))?;

            let toggled = service.toggle_active(existing.id)?;
            let state = if toggled.is_active { "active" } else { "inactive" };
            println!("{} is now {}", toggled.name, state);

            let summary = service.monthly_summary()?;
            println!("{}", format_monthly_total(&summary, symbol));
        }

        RecurringCommands::Delete { expense, force } => {
            let existing = service
                .find(&expense)?
                .ok_or_else(|| FinanceError::recurring_not_found(&expense))?;

            if !force {
                println!("About to delete recurring expense:");
                print!("{}", format_recurring_details(&existing, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(existing.id)?;
            println!("Deleted recurring expense: {}", deleted.name);
        }
    }

    Ok(())
}
