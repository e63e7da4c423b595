//! Declared-versus-computed fund comparison.

use crate::models::{Compatibility, FundCode};

/// Compares the declared fund with the computed one.
///
/// A missing value on either side is incompatible.
///
/// # Example
///
/// ```
/// use fund_audit::classification::check_compatibility;
/// use fund_audit::models::{Compatibility, FundCode};
///
/// assert_eq!(
///     check_compatibility(Some(FundCode::Funprev), Some(FundCode::Funfin)),
///     Compatibility::Incompatible
/// );
/// ```
pub fn check_compatibility(
    declared: Option<FundCode>,
    computed: Option<FundCode>,
) -> Compatibility {
    match (declared, computed) {
        (Some(d), Some(c)) if d == c => Compatibility::Compatible,
        _ => Compatibility::Incompatible,
    }
}
