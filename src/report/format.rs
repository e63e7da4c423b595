//! Number formatting shared by the text reports.

use rust_decimal::Decimal;

/// Returns `part / total` as a percentage rounded to two decimals.
///
/// An empty total yields zero rather than dividing by zero.
///
/// # Example
///
/// ```
/// use fund_audit::report::percent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percent(2, 3), Decimal::new(6667, 2));
/// assert_eq!(percent(0, 0), Decimal::ZERO);
/// ```
pub fn percent(part: usize, total: usize) -> Decimal {
    if total == 0 {
        return Decimal::ZERO;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(total)).round_dp(2)
}

/// Formats `part / total` as `NN.NN%`.
pub fn format_percent(part: usize, total: usize) -> String {
    format!("{:.2}%", percent(part, total))
}

/// Formats an amount with two decimals.
pub fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}
