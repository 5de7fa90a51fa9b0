//! Export CLI command

use std::io::Write;
use std::path::PathBuf;

use crate::error::{FindashError, FindashResult};
use crate::export::export_transactions_csv;
use crate::services::LedgerService;
use crate::storage::Store;

/// Handle the `export` command
///
/// Writes the user's transactions as CSV to the given file, or to stdout
/// when no output path is provided.
pub fn handle_export_command(
    store: &Store,
    email: &str,
    output: Option<PathBuf>,
) -> FindashResult<()> {
    let session = super::authenticate(store, email)?;
    let user_id = session.require_user()?;

    let transactions = LedgerService::new(store).list(user_id)?;
    let bytes = export_transactions_csv(&transactions)?;

    match output {
        Some(path) => {
            std::fs::write(&path, &bytes)
                .map_err(|e| FindashError::Export(format!("Failed to write {}: {}", path.display(), e)))?;
            println!("Exported {} transactions to {}", transactions.len(), path.display());
        }
        None => {
            std::io::stdout()
                .write_all(&bytes)
                .map_err(|e| FindashError::Export(e.to_string()))?;
        }
    }

    Ok(())
}
