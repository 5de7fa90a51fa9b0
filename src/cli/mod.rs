//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer. Commands that operate on a
//! user's ledger log in first; the resulting session scopes every call.

pub mod auth;
pub mod export;
pub mod forecast;
pub mod transaction;

pub use auth::{handle_login, handle_register};
pub use export::handle_export_command;
pub use forecast::handle_forecast_command;
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::auth::{AuthService, Session};
use crate::error::{FindashError, FindashResult};
use crate::storage::Store;

/// Prompt for a password and log the user in, producing a session
pub fn authenticate(store: &Store, email: &str) -> FindashResult<Session> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| FindashError::Io(format!("Failed to read password: {}", e)))?;

    let user_id = AuthService::new(store).login(email, &password)?;
    Ok(Session::authenticated(user_id))
}
