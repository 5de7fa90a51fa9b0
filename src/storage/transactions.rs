//! Transaction collection store
//!
//! Persists the transactions collection as a whole-snapshot CSV file, with
//! the same baseline/scratch precedence as the user store. Transaction IDs
//! are assigned over the entire collection, so they are globally unique
//! across users.

use std::path::PathBuf;

use crate::config::StorePaths;
use crate::error::FindashError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_rows, write_rows_atomic};

/// Fixed column schema for transactions.csv
const COLUMNS: [&str; 6] = [
    "transaction_id",
    "user_id",
    "category",
    "amount",
    "type",
    "transaction_date",
];

/// Store for the transactions collection
pub struct TransactionStore {
    baseline: PathBuf,
    scratch: PathBuf,
}

impl TransactionStore {
    /// Create a transaction store from the resolved paths
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            baseline: paths.transactions_baseline(),
            scratch: paths.transactions_scratch(),
        }
    }

    /// Load the full collection
    ///
    /// The scratch snapshot takes precedence over the baseline; when neither
    /// exists the collection is empty (not an error).
    pub fn load(&self) -> Result<Vec<Transaction>, FindashError> {
        if self.scratch.exists() {
            read_rows(&self.scratch)
        } else if self.baseline.exists() {
            read_rows(&self.baseline)
        } else {
            Ok(Vec::new())
        }
    }

    /// Save the full collection to the scratch snapshot, replacing its
    /// previous contents
    pub fn save(&self, transactions: &[Transaction]) -> Result<(), FindashError> {
        write_rows_atomic(&self.scratch, &COLUMNS, transactions)
    }

    /// The ID the next created transaction will get, computed over the
    /// whole collection regardless of owner
    pub fn next_id(transactions: &[Transaction]) -> TransactionId {
        TransactionId::next_after(transactions.iter().map(|t| t.id))
    }
}
