//! Storage layer for findash (the record store)
//!
//! Provides CSV whole-snapshot storage with atomic writes and
//! baseline/scratch precedence: reads see the scratch copy once one exists,
//! writes only ever create or replace the scratch copy.
//!
//! Every mutation elsewhere in the crate follows load, in-memory transform,
//! save of the complete collection. There is no locking or versioning, so
//! two concurrent writers interleave as last-writer-wins, matching the
//! legacy system this replaces.

pub mod file_io;
pub mod transactions;
pub mod users;

pub use file_io::{read_rows, write_rows_atomic};
pub use transactions::TransactionStore;
pub use users::UserStore;

use crate::config::StorePaths;
use crate::error::FindashError;

/// Main storage coordinator that provides access to both collections
pub struct Store {
    paths: StorePaths,
    pub users: UserStore,
    pub transactions: TransactionStore,
}

impl Store {
    /// Create a new Store instance
    pub fn new(paths: StorePaths) -> Result<Self, FindashError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            users: UserStore::new(&paths),
            transactions: TransactionStore::new(&paths),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &StorePaths {
        &self.paths
    }
}
