//! Category CLI commands
//!
//! Implements CLI commands for category management.

use clap::Subcommand;

use super::resolve_category;
use crate::display::category::{format_category_details, format_category_table};
use crate::error::FinanceResult;
use crate::models::TransactionType;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Only categories of this type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Create a new category
    Create {
        /// Category name
        name: String,
        /// Category type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: TransactionType,
        /// Hex color (e.g., "#3b82f6"); picked from the palette if omitted
        #[arg(long)]
        color: Option<String>,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
        /// Disambiguate a name used by both types
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// Disambiguate a name used by both types
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New hex color
        #[arg(long)]
        color: Option<String>,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
        /// Disambiguate a name used by both types
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> FinanceResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List { kind } => {
            let categories = match kind {
                Some(kind) => service.list_by_type(kind)?,
                None => service.list()?,
            };
            println!("{}", format_category_table(&categories));
        }

        CategoryCommands::Create { name, kind, color } => {
            let category = service.create(&name, kind, color.as_deref())?;
            println!("Created category: {}", category.name);
            println!("  ID:    {}", category.id);
            println!("  Type:  {}", category.kind);
            println!("  Color: {}", category.color);
        }

        CategoryCommands::Show { category, kind } => {
            let category = resolve_category(&service, &category, kind)?;
            let count = service.usage_count(category.id)?;
            print!("{}", format_category_details(&category, count));
        }

        CategoryCommands::Edit {
            category,
            kind,
            name,
            color,
        } => {
            let category = resolve_category(&service, &category, kind)?;

            if name.is_none() && color.is_none() {
                println!("Nothing to change. Use --name or --color.");
                return Ok(());
            }

            let updated = service.update(category.id, name.as_deref(), color.as_deref())?;
            println!("Updated category: {}", updated.name);
            println!("  Color: {}", updated.color);
        }

        CategoryCommands::Delete {
            category,
            kind,
            force,
        } => {
            let category = resolve_category(&service, &category, kind)?;

            if !force {
                let count = service.usage_count(category.id)?;
                println!("About to delete category:");
                print!("{}", format_category_details(&category, count));
                if count > 0 {
                    println!();
                    println!(
                        "Its {} transactions keep the name '{}' and will show the default color.",
                        count, category.name
                    );
                }
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(category.id)?;
            println!("Deleted category: {}", deleted.name);
        }
    }

    Ok(())
}
