//! Core data models for findash
//!
//! This module contains the data structures for the two persisted
//! collections: users and transactions.

pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use ids::{TransactionId, UserId};
pub use money::Money;
pub use transaction::{Transaction, TransactionType};
pub use user::User;
