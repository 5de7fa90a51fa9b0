//! findash - Personal finance ledger with expense forecasting
//!
//! This library provides the core functionality for the findash application:
//! a credential-gated transaction ledger over CSV snapshot storage, with a
//! linear-trend forecast of next month's spending.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the baseline and scratch snapshots
//! - `error`: Custom error types
//! - `models`: Core data models (users, transactions, money, ids)
//! - `storage`: CSV whole-snapshot storage layer (the record store)
//! - `auth`: Password hashing, registration, login, and sessions
//! - `services`: The per-user transaction ledger
//! - `reports`: The monthly expense forecast and overage signal
//! - `export`: CSV export of a user's ledger
//! - `notify`: Budget alert delivery seam
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use findash::config::StorePaths;
//! use findash::storage::Store;
//!
//! let store = Store::new(StorePaths::new()?)?;
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::FindashError;
