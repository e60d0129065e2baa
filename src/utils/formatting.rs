//! Formatting utilities shared by the text table, the HTML body and the
//! XLSX export.

use rust_decimal::{Decimal, RoundingStrategy};

/// Width of one hours column in the text table.
pub const HOURS_WIDTH: usize = 7;

/// Hours as shown in every rendering: two decimals, half away from zero.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `{:7.2}` of the hours, or seven blanks when the department has none.
pub fn nice_number(hours: Option<Decimal>) -> String {
    match hours {
        Some(h) => format!("{:>width$.2}", round_hours(h), width = HOURS_WIDTH),
        None => " ".repeat(HOURS_WIDTH),
    }
}

/// Truncate to `max_chars` characters, then pad on the right to `width`.
pub fn fit(s: &str, width: usize, max_chars: usize) -> String {
    let cut: String = s.chars().take(max_chars).collect();
    format!("{:<width$}", cut, width = width)
}
