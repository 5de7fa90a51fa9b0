//! Service layer for findash
//!
//! Business logic on top of the storage layer. The ledger service is the
//! only CRUD surface over the transactions collection.

pub mod ledger;

pub use ledger::LedgerService;
