use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use finance_tracker::cli::{
    handle_category_command, handle_dashboard_command, handle_data_command,
    handle_recurring_command, handle_summary_command, handle_transaction_command,
};
use finance_tracker::config::paths::DATA_DIR_ENV;
use finance_tracker::config::{FinancePaths, Settings};
use finance_tracker::storage::{init::initialize_storage, Storage};

/// Environment variable holding the log filter (e.g. `debug`, `finance_tracker=info`)
const LOG_ENV: &str = "FINANCE_LOG";

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Track income, expenses, pending payments and monthly bills",
    long_about = "A personal finance tracker for the terminal. Record income and \
                  expense transactions, organize them by category, keep an eye on \
                  pending payments and recurring monthly expenses."
)]
struct Cli {
    /// Directory holding config.json and the data/ folder
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Show income, expense, balance and pending totals
    Summary {
        /// Print the figures as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summary, recent transactions and recurring expenses
    Dashboard {
        /// Number of recent transactions to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(finance_tracker::cli::TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(finance_tracker::cli::CategoryCommands),

    /// Recurring expense commands
    #[command(subcommand)]
    Recurring(finance_tracker::cli::RecurringCommands),

    /// Export and import data
    #[command(subcommand)]
    Data(finance_tracker::cli::DataCommands),
}

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => FinancePaths::with_base_dir(dir),
        None => FinancePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Init) = cli.command {
        println!("Initializing finance tracker at: {}", paths.base_dir().display());
        let fresh = !paths.is_initialized();
        initialize_storage(&paths)?;
        settings.save(&paths)?;
        if fresh {
            println!("Initialization complete!");
            println!();
            println!("Default categories have been created:");
            println!("  - Income: Salary, Freelance, Investments, Other Income");
            println!("  - Expense: Food, Transport, Housing, Utilities, Entertainment,");
            println!("             Health, Shopping, Other");
        } else {
            println!("Already initialized; existing data was left untouched.");
        }
        println!();
        println!("Run 'finance category list' to see all categories.");
        return Ok(());
    }

    if !paths.is_initialized() {
        tracing::info!(path = %paths.base_dir().display(), "first run, initializing storage");
        initialize_storage(&paths)?;
    }

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {}
        Some(Commands::Config) => {
            println!("Finance Tracker Configuration");
            println!("=============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:        {}", settings.currency_symbol);
            println!("  Date format:            {}", settings.date_format);
            println!("  Default category color: {}", settings.default_category_color);
        }
        Some(Commands::Summary { json }) => {
            handle_summary_command(&storage, &settings, json)?;
        }
        Some(Commands::Dashboard { limit }) => {
            handle_dashboard_command(&storage, &settings, limit)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Recurring(cmd)) => {
            handle_recurring_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Data(cmd)) => {
            handle_data_command(&storage, cmd)?;
        }
        None => {
            println!("Finance Tracker - income, expenses and monthly bills");
            println!();
            println!("Run 'finance --help' for usage information.");
            println!("Run 'finance dashboard' for an overview.");
        }
    }

    Ok(())
}
