//! Budget alert delivery
//!
//! The core only decides *when* an alert should go out (the overage signal
//! from the forecast report); delivery itself is a collaborator behind a
//! trait. Delivery failure is informational, never fatal to the flow that
//! triggered it.

use crate::error::FindashResult;

/// A destination for budget overage alerts
pub trait BudgetAlertSink {
    /// Deliver an alert to the given address, returning a confirmation
    /// message on success
    fn send_budget_alert(&self, email: &str, message: &str) -> FindashResult<String>;
}

/// Sink that prints the alert to the terminal
///
/// Stands in for a real delivery channel (the legacy system sent email);
/// wire-level delivery is out of scope here.
#[derive(Debug, Default)]
pub struct ConsoleAlertSink;

impl BudgetAlertSink for ConsoleAlertSink {
    fn send_budget_alert(&self, email: &str, message: &str) -> FindashResult<String> {
        println!("[alert for {}] {}", email, message);
        Ok(format!("Alert recorded for {}", email))
    }
}
