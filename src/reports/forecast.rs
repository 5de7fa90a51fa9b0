//! Expense forecast
//!
//! Projects next month's spending from a user's transaction history using a
//! simple linear trend. Expense rows are grouped by calendar month and an
//! ordinary-least-squares line of monthly total against month index is
//! evaluated one month past the last observed one.
//!
//! All functions here are pure and deterministic: the closed-form fit has no
//! stochastic elements, so a fixed input always produces the same output.

use std::collections::BTreeMap;

use crate::models::Transaction;

/// A user is flagged as over budget when the forecast exceeds total
/// historical spending by this factor
const OVERAGE_FACTOR: f64 = 1.2;

/// Predict next month's total expense
///
/// Rules, in order:
/// 1. No transactions at all: 0.
/// 2. Income rows are dropped; expenses are summed per calendar month.
/// 3. Fewer than two distinct expense months: the sum of all expense
///    amounts (no trend to extrapolate, so fall back to total-to-date).
/// 4. Otherwise fit a least-squares line over the month totals indexed
///    chronologically from 0 and evaluate it at the next index.
///
/// The projection is not clamped; a falling trend can produce a negative
/// forecast. That mirrors the legacy behavior this replaces.
pub fn predict_next_month(transactions: &[Transaction]) -> f64 {
    if transactions.is_empty() {
        return 0.0;
    }

    // BTreeMap keys iterate in chronological (year, month) order
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for txn in transactions.iter().filter(|t| t.is_expense()) {
        *monthly.entry(txn.month()).or_insert(0.0) += txn.amount.to_dollars();
    }

    if monthly.len() < 2 {
        return monthly.values().sum();
    }

    let totals: Vec<f64> = monthly.values().copied().collect();
    let (slope, intercept) = fit_line(&totals);

    // One month past the last observed index
    slope * totals.len() as f64 + intercept
}

/// Sum of all expense amounts over the full history
pub fn total_expense(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount.to_dollars())
        .sum()
}

/// Whether the forecast signals a likely budget overage
///
/// The boundary is strict: a forecast of exactly 120% of historical
/// spending is not an overage.
pub fn is_over_budget(predicted: f64, total_to_date: f64) -> bool {
    predicted > total_to_date * OVERAGE_FACTOR
}

/// Closed-form ordinary least squares over y values at x = 0, 1, 2, ...
///
/// Returns (slope, intercept). Callers must pass at least two points.
fn fit_line(totals: &[f64]) -> (f64, f64) {
    let n = totals.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;

    for (i, &y) in totals.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_xx - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n;

    (slope, intercept)
}

/// Forecast summary for one user's history
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    /// Projected expense total for the month after the last observed one
    pub predicted_expense: f64,
    /// Sum of all expense amounts across the full history
    pub total_expense: f64,
    /// Whether the projection exceeds 120% of the historical total
    pub over_budget: bool,
}

impl ForecastReport {
    /// Generate the forecast report for a transaction history
    pub fn generate(transactions: &[Transaction]) -> Self {
        let predicted_expense = predict_next_month(transactions);
        let total = total_expense(transactions);

        Self {
            predicted_expense,
            total_expense: total,
            over_budget: is_over_budget(predicted_expense, total),
        }
    }
}
