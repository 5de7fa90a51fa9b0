//! Forecast CLI command

use crate::display::format_forecast;
use crate::error::FindashResult;
use crate::notify::{BudgetAlertSink, ConsoleAlertSink};
use crate::reports::ForecastReport;
use crate::services::LedgerService;
use crate::storage::Store;

/// Handle the `forecast` command
///
/// Prints next month's projected expense and, when the overage signal fires
/// and `send_alert` is set, pushes a budget alert through the configured
/// sink. A delivery failure is reported as information, not as an error.
pub fn handle_forecast_command(store: &Store, email: &str, send_alert: bool) -> FindashResult<()> {
    let session = super::authenticate(store, email)?;
    let user_id = session.require_user()?;

    let transactions = LedgerService::new(store).list(user_id)?;
    let report = ForecastReport::generate(&transactions);

    print!("{}", format_forecast(&report));

    if report.over_budget && send_alert {
        let sink = ConsoleAlertSink;
        match sink.send_budget_alert(email, "You are likely to exceed your budget next month!") {
            Ok(confirmation) => println!("{}", confirmation),
            Err(e) => println!("Could not send budget alert: {}", e),
        }
    }

    Ok(())
}
