//! Scenario refinement of incompatible records.

use crate::models::{Compatibility, Scenario};

/// Assigns the refinement scenario of a record.
///
/// Compatible records have no scenario. Incompatible records are Scenario 1
/// when their ID is unique, Scenario 2 when duplicated and in the
/// `active_status` code, and Scenario 3 when duplicated in any other status
/// (including a missing one).
///
/// # Example
///
/// ```
/// use fund_audit::classification::assign_scenario;
/// use fund_audit::models::{Compatibility, Scenario};
///
/// assert_eq!(
///     assign_scenario(Compatibility::Incompatible, true, Some(1), 1),
///     Some(Scenario::Scenario2)
/// );
/// assert_eq!(assign_scenario(Compatibility::Compatible, true, Some(1), 1), None);
/// ```
pub fn assign_scenario(
    compatibility: Compatibility,
    duplicate_id: bool,
    status_code: Option<i64>,
    active_status: i64,
) -> Option<Scenario> {
    if compatibility == Compatibility::Compatible {
        return None;
    }
    Some(match (duplicate_id, status_code) {
        (false, _) => Scenario::Scenario1,
        (true, Some(code)) if code == active_status => Scenario::Scenario2,
        (true, _) => Scenario::Scenario3,
    })
}
