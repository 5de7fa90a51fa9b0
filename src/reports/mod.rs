//! Reports for findash
//!
//! Pure read-only analysis over a user's transactions.

pub mod forecast;

pub use forecast::{is_over_budget, predict_next_month, total_expense, ForecastReport};
