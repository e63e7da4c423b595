//! Fund rule for pensions.
//!
//! A pension follows the fund of the servant who instituted it, which only
//! depends on that servant's birth date.

use chrono::NaiveDate;

use crate::models::{Compatibility, FundCode};

/// Computes the fund of a pension from the instituting servant's birth date.
///
/// A missing birth date is treated as FUNPREV; births on or before the cutoff
/// are FUNPREV; later births are undefined.
///
/// # Example
///
/// ```
/// use fund_audit::classification::classify_pensioner_fund;
/// use fund_audit::models::FundCode;
/// use chrono::NaiveDate;
///
/// let cutoff = NaiveDate::from_ymd_opt(1957, 2, 28).unwrap();
/// assert_eq!(classify_pensioner_fund(None, cutoff), Some(FundCode::Funprev));
/// assert_eq!(classify_pensioner_fund(NaiveDate::from_ymd_opt(1970, 1, 1), cutoff), None);
/// ```
pub fn classify_pensioner_fund(
    institutor_birth: Option<NaiveDate>,
    cutoff_birth: NaiveDate,
) -> Option<FundCode> {
    match institutor_birth {
        None => Some(FundCode::Funprev),
        Some(birth) if birth <= cutoff_birth => Some(FundCode::Funprev),
        Some(_) => None,
    }
}

/// A pension is compatible only when both declared and computed funds are
/// FUNPREV.
pub fn pensioner_compatibility(
    declared: Option<FundCode>,
    computed: Option<FundCode>,
) -> Compatibility {
    if declared == Some(FundCode::Funprev) && computed == Some(FundCode::Funprev) {
        Compatibility::Compatible
    } else {
        Compatibility::Incompatible
    }
}
