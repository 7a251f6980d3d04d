//! Presentation formatting for amounts, dates, and month keys. Pure string
//! helpers; the renderer that consumes them stays outside this crate.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to the fixed two-decimal display precision, half-up.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders an amount with the currency symbol and exactly two decimals.
pub fn format_amount(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, round_display(amount))
}

/// Medium date label, e.g. `Oct 1, 2025`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long label for a `YYYY-MM` key, e.g. `October 2025`. Returns `None` when
/// the key is not a valid month.
pub fn format_month(month_key: &str) -> Option<String> {
    let first = NaiveDate::parse_from_str(&format!("{month_key}-01"), "%Y-%m-%d").ok()?;
    Some(first.format("%B %Y").to_string())
}
