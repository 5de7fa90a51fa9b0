//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::format_transaction_register;
use crate::error::{FindashError, FindashResult};
use crate::models::{Money, TransactionId, TransactionType};
use crate::services::LedgerService;
use crate::storage::Store;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Email of the account to log in as
        #[arg(short, long)]
        email: String,
        /// Category label (e.g. "Groceries")
        category: String,
        /// Amount (e.g. "50.00"), at least 0.01
        amount: String,
        /// Transaction type: Income or Expense
        #[arg(short = 't', long, default_value = "Expense")]
        kind: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List your transactions, newest first
    List {
        /// Email of the account to log in as
        #[arg(short, long)]
        email: String,
    },
    /// Delete a transaction by ID
    Delete {
        /// Email of the account to log in as
        #[arg(short, long)]
        email: String,
        /// Transaction ID to delete
        id: i64,
    },
}

/// Handle a transaction subcommand
pub fn handle_transaction_command(store: &Store, cmd: TransactionCommands) -> FindashResult<()> {
    match cmd {
        TransactionCommands::Add {
            email,
            category,
            amount,
            kind,
            date,
        } => {
            let session = super::authenticate(store, &email)?;
            let user_id = session.require_user()?;

            let amount = Money::parse(&amount)
                .map_err(|e| FindashError::Validation(e.to_string()))?;
            let kind: TransactionType = kind
                .parse()
                .map_err(FindashError::Validation)?;
            let date = match date {
                Some(s) => s
                    .parse::<NaiveDate>()
                    .map_err(|e| FindashError::Validation(format!("Invalid date: {}", e)))?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = LedgerService::new(store).add(user_id, &category, amount, kind, date)?;
            println!("Added transaction {}: {}", txn.id, txn);
        }
        TransactionCommands::List { email } => {
            let session = super::authenticate(store, &email)?;
            let user_id = session.require_user()?;

            let transactions = LedgerService::new(store).list(user_id)?;
            print!("{}", format_transaction_register(&transactions));
        }
        TransactionCommands::Delete { email, id } => {
            let session = super::authenticate(store, &email)?;
            session.require_user()?;

            LedgerService::new(store).delete(TransactionId::new(id))?;
            println!("Deleted transaction {} (if it existed)", id);
        }
    }

    Ok(())
}
