//! Transaction model
//!
//! A single income or expense entry owned by exactly one user. Rows are
//! immutable once written; an amend is a delete followed by a re-add. The
//! field layout matches the `transactions.csv` snapshot columns exactly,
//! with the date serialized as `YYYY-MM-DD`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{TransactionId, UserId};
use super::money::Money;

/// Whether a transaction adds to or draws from the user's funds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money coming in; excluded from expense forecasting
    Income,
    /// Money going out; the input to expense forecasting
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" | "income" => Ok(Self::Income),
            "Expense" | "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned max-plus-one over the whole collection
    /// (global across users, not per-user)
    #[serde(rename = "transaction_id")]
    pub id: TransactionId,

    /// The user this transaction belongs to
    pub user_id: UserId,

    /// Free-form category label ("Groceries", "Rent", ...)
    pub category: String,

    /// Amount, at least one cent
    pub amount: Money,

    /// Income or Expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Transaction date
    #[serde(rename = "transaction_date")]
    pub date: NaiveDate,
}

impl Transaction {
    /// Create a new transaction record
    pub fn new(
        id: TransactionId,
        user_id: UserId,
        category: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            user_id,
            category: category.into(),
            amount,
            kind,
            date,
        }
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The calendar month this transaction falls in, as (year, month)
    pub fn month(&self) -> (i32, u32) {
        (self.date.year(), self.date.month())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.kind,
            self.amount
        )
    }
}
