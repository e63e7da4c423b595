//! Age derivation in whole years.

use chrono::NaiveDate;

/// Days per year used for age derivation.
pub const DAYS_PER_YEAR: i64 = 365;

/// Returns the number of whole 365-day years from `from` to `to`, rounding
/// toward negative infinity. `None` when either date is missing.
///
/// # Example
///
/// ```
/// use fund_audit::classification::years_between;
/// use chrono::NaiveDate;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 1, 1);
/// let entry = NaiveDate::from_ymd_opt(2008, 1, 1);
/// assert_eq!(years_between(birth, entry), Some(18));
/// ```
pub fn years_between(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Option<i64> {
    let (from, to) = (from?, to?);
    Some((to - from).num_days().div_euclid(DAYS_PER_YEAR))
}
