//! Display formatting for findash

pub mod transaction;

pub use transaction::{format_forecast, format_transaction_register};
