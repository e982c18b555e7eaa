//! Amount and date formatting for display.

use chrono::{DateTime, Local, Utc};

/// Formats `amount` with two decimals after `symbol`, keeping the sign in front.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Renders a stored timestamp as a local calendar date.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d").to_string()
}
