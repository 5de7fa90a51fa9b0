//! CSV export functionality
//!
//! Exports a transaction list as UTF-8 CSV bytes with exactly the same
//! column layout as the transactions collection snapshot, suitable for a
//! download or a file on disk.

use crate::error::{FindashError, FindashResult};
use crate::models::Transaction;

/// Column header matching the transactions collection schema
const HEADER: [&str; 6] = [
    "transaction_id",
    "user_id",
    "category",
    "amount",
    "type",
    "transaction_date",
];

/// Export transactions to CSV bytes
///
/// The rows are written in the order given; callers pass the ledger's
/// already-sorted listing.
pub fn export_transactions_csv(transactions: &[Transaction]) -> FindashResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| FindashError::Export(e.to_string()))?;

    for txn in transactions {
        writer
            .serialize(txn)
            .map_err(|e| FindashError::Export(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| FindashError::Export(e.to_string()))
}
