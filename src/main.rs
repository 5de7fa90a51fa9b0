use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use findash::cli::{
    handle_export_command, handle_forecast_command, handle_login, handle_register,
    handle_transaction_command, TransactionCommands,
};
use findash::config::StorePaths;
use findash::storage::Store;

#[derive(Parser)]
#[command(
    name = "findash",
    version,
    about = "Personal finance ledger with expense forecasting",
    long_about = "findash keeps a credential-gated ledger of income and expense \
                  transactions and projects next month's spending from a simple \
                  linear trend over your monthly expense totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new user
    Register {
        /// Full name
        #[arg(short, long)]
        name: String,
        /// Email address (unique, used for login)
        #[arg(short, long)]
        email: String,
    },

    /// Check that an email and password log in
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "tx")]
    Transaction(TransactionCommands),

    /// Predict next month's expense and flag a likely budget overage
    Forecast {
        /// Email of the account to log in as
        #[arg(short, long)]
        email: String,
        /// Send a budget alert when the overage signal fires
        #[arg(long)]
        send_alert: bool,
    },

    /// Export your transactions as CSV
    Export {
        /// Email of the account to log in as
        #[arg(short, long)]
        email: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = StorePaths::new()?;
    let store = Store::new(paths)?;

    match cli.command {
        Some(Commands::Register { name, email }) => {
            handle_register(&store, &name, &email)?;
        }
        Some(Commands::Login { email }) => {
            handle_login(&store, &email)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, cmd)?;
        }
        Some(Commands::Forecast { email, send_alert }) => {
            handle_forecast_command(&store, &email, send_alert)?;
        }
        Some(Commands::Export { email, output }) => {
            handle_export_command(&store, &email, output)?;
        }
        Some(Commands::Config) => {
            let paths = store.paths();
            println!("findash Configuration");
            println!("=====================");
            println!("Data directory:    {}", paths.base_dir().display());
            println!("Scratch directory: {}", paths.scratch_dir().display());
            println!();
            println!("Baseline snapshots:");
            println!("  users:        {}", paths.users_baseline().display());
            println!("  transactions: {}", paths.transactions_baseline().display());
            println!();
            println!("All writes go to the scratch copies; baselines are never modified.");
        }
        None => {
            println!("findash - personal finance ledger with expense forecasting");
            println!();
            println!("Run 'findash --help' for usage information.");
        }
    }

    Ok(())
}
