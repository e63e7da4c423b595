//! Fund-eligibility rule for servants and retirees.
//!
//! This module decides which fund a record belongs to from its entry date,
//! birth date and supplementary pension adherence, given the reform cutoff
//! dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::CutoffDates;
use crate::models::{FundCode, SupplementaryPension};

/// The branch of the eligibility rule that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundRule {
    /// A date is missing and so is the pension flag.
    MissingInputs,
    /// Entered on or before the entry cutoff, born after the birth cutoff and
    /// not in the supplementary scheme.
    Grandfathered,
    /// Entered after the entry cutoff.
    EnteredAfterCutoff,
    /// Born on or before the birth cutoff.
    BornOnOrBeforeCutoff,
    /// Adhered to the supplementary pension scheme.
    SupplementaryPension,
    /// Partially missing inputs satisfy neither branch.
    Inconclusive,
}

impl FundRule {
    /// Returns a one-line explanation of the branch.
    pub fn description(self) -> &'static str {
        match self {
            Self::MissingInputs => "date and supplementary pension flag missing",
            Self::Grandfathered => {
                "pre-reform entrant born after the birth cutoff without supplementary pension"
            }
            Self::EnteredAfterCutoff => "entered the entity after the reform cutoff",
            Self::BornOnOrBeforeCutoff => "born on or before the birth cutoff",
            Self::SupplementaryPension => "adhered to the supplementary pension scheme",
            Self::Inconclusive => "partial inputs match no branch",
        }
    }
}

/// The outcome of the eligibility rule together with the branch taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundDecision {
    /// The computed fund, or `None` when undefined.
    pub fund: Option<FundCode>,
    /// The branch that decided.
    pub rule: FundRule,
}

/// Applies the eligibility rule, first matching branch wins.
///
/// 1. Entry or birth date missing, and pension flag missing: undefined.
/// 2. `entry <= cutoff.entry` and `birth > cutoff.birth` and no supplementary
///    pension: [`FundCode::Funfin`].
/// 3. `entry > cutoff.entry` or `birth <= cutoff.birth` or supplementary
///    pension: [`FundCode::Funprev`].
/// 4. Otherwise undefined.
///
/// A comparison against a missing value is false, so branch 2 needs all three
/// inputs while branch 3 needs only one.
///
/// # Example
///
/// ```
/// use fund_audit::classification::decide_fund;
/// use fund_audit::config::CutoffDates;
/// use fund_audit::models::{FundCode, SupplementaryPension};
/// use chrono::NaiveDate;
///
/// let cutoffs = CutoffDates::default();
/// let decision = decide_fund(
///     NaiveDate::from_ymd_opt(2010, 1, 1),
///     NaiveDate::from_ymd_opt(1960, 1, 1),
///     Some(SupplementaryPension::No),
///     &cutoffs,
/// );
/// assert_eq!(decision.fund, Some(FundCode::Funfin));
/// ```
pub fn decide_fund(
    entry: Option<NaiveDate>,
    birth: Option<NaiveDate>,
    pension: Option<SupplementaryPension>,
    cutoffs: &CutoffDates,
) -> FundDecision {
    if (entry.is_none() || birth.is_none()) && pension.is_none() {
        return FundDecision {
            fund: None,
            rule: FundRule::MissingInputs,
        };
    }

    let entered_before = entry.map(|e| e <= cutoffs.entry);
    let born_after = birth.map(|b| b > cutoffs.birth);

    let (fund, rule) = if entered_before == Some(true)
        && born_after == Some(true)
        && pension == Some(SupplementaryPension::No)
    {
        (Some(FundCode::Funfin), FundRule::Grandfathered)
    } else if entered_before == Some(false) {
        (Some(FundCode::Funprev), FundRule::EnteredAfterCutoff)
    } else if born_after == Some(false) {
        (Some(FundCode::Funprev), FundRule::BornOnOrBeforeCutoff)
    } else if pension == Some(SupplementaryPension::Yes) {
        (Some(FundCode::Funprev), FundRule::SupplementaryPension)
    } else {
        (None, FundRule::Inconclusive)
    };

    FundDecision { fund, rule }
}

/// Returns only the computed fund of [`decide_fund`].
pub fn classify_fund(
    entry: Option<NaiveDate>,
    birth: Option<NaiveDate>,
    pension: Option<SupplementaryPension>,
    cutoffs: &CutoffDates,
) -> Option<FundCode> {
    decide_fund(entry, birth, pension, cutoffs).fund
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn cutoffs() -> CutoffDates {
        CutoffDates::default()
    }

    #[test]
    fn test_grandfathered_entrant_is_funfin() {
        let decision = decide_fund(
            date(2010, 1, 1),
            date(1960, 1, 1),
            Some(SupplementaryPension::No),
            &cutoffs(),
        );
        assert_eq!(decision.fund, Some(FundCode::Funfin));
        assert_eq!(decision.rule, FundRule::Grandfathered);
    }

    #[test]
    fn test_entry_on_cutoff_is_funfin() {
        let fund = classify_fund(
            date(2018, 12, 27),
            date(1960, 1, 1),
            Some(SupplementaryPension::No),
            &cutoffs(),
        );
        assert_eq!(fund, Some(FundCode::Funfin));
    }

    #[test]
    fn test_entry_day_after_cutoff_is_funprev() {
        let decision = decide_fund(
            date(2018, 12, 28),
            date(1960, 1, 1),
            Some(SupplementaryPension::No),
            &cutoffs(),
        );
        assert_eq!(decision.fund, Some(FundCode::Funprev));
        assert_eq!(decision.rule, FundRule::EnteredAfterCutoff);
    }

    #[test]
    fn test_birth_on_cutoff_is_funprev() {
        let decision = decide_fund(
            date(2010, 1, 1),
            date(1957, 2, 28),
            Some(SupplementaryPension::No),
            &cutoffs(),
        );
        assert_eq!(decision.fund, Some(FundCode::Funprev));
        assert_eq!(decision.rule, FundRule::BornOnOrBeforeCutoff);
    }

    #[test]
    fn test_supplementary_pension_is_funprev() {
        let decision = decide_fund(
            date(2010, 1, 1),
            date(1960, 1, 1),
            Some(SupplementaryPension::Yes),
            &cutoffs(),
        );
        assert_eq!(decision.fund, Some(FundCode::Funprev));
        assert_eq!(decision.rule, FundRule::SupplementaryPension);
    }

    #[test]
    fn test_missing_date_and_flag_is_undefined() {
        let decision = decide_fund(None, date(1960, 1, 1), None, &cutoffs());
        assert_eq!(decision.fund, None);
        assert_eq!(decision.rule, FundRule::MissingInputs);

        let decision = decide_fund(date(2010, 1, 1), None, None, &cutoffs());
        assert_eq!(decision.rule, FundRule::MissingInputs);
    }

    #[test]
    fn test_missing_entry_with_inconclusive_rest_is_undefined() {
        let decision = decide_fund(
            None,
            date(1960, 1, 1),
            Some(SupplementaryPension::No),
            &cutoffs(),
        );
        assert_eq!(decision.fund, None);
        assert_eq!(decision.rule, FundRule::Inconclusive);
    }

    #[test]
    fn test_missing_entry_with_supplementary_pension_is_funprev() {
        let fund = classify_fund(None, None, Some(SupplementaryPension::Yes), &cutoffs());
        assert_eq!(fund, Some(FundCode::Funprev));
    }

    #[test]
    fn test_missing_flag_with_late_entry_is_funprev() {
        let fund = classify_fund(date(2020, 1, 1), date(1990, 1, 1), None, &cutoffs());
        assert_eq!(fund, Some(FundCode::Funprev));
    }

    #[test]
    fn test_missing_flag_with_early_entry_late_birth_is_undefined() {
        let fund = classify_fund(date(2010, 1, 1), date(1990, 1, 1), None, &cutoffs());
        assert_eq!(fund, None);
    }

    #[test]
    fn test_rule_descriptions_are_non_empty() {
        for rule in [
            FundRule::MissingInputs,
            FundRule::Grandfathered,
            FundRule::EnteredAfterCutoff,
            FundRule::BornOnOrBeforeCutoff,
            FundRule::SupplementaryPension,
            FundRule::Inconclusive,
        ] {
            assert!(!rule.description().is_empty());
        }
    }

    fn any_date() -> impl Strategy<Value = Option<NaiveDate>> {
        prop::option::of((1930i32..2030, 1u32..=12, 1u32..=28))
            .prop_map(|d| d.and_then(|(y, m, day)| NaiveDate::from_ymd_opt(y, m, day)))
    }

    fn any_pension() -> impl Strategy<Value = Option<SupplementaryPension>> {
        prop::option::of(prop_oneof![
            Just(SupplementaryPension::Yes),
            Just(SupplementaryPension::No),
        ])
    }

    proptest! {
        #[test]
        fn prop_computed_fund_is_funprev_funfin_or_none(
            entry in any_date(),
            birth in any_date(),
            pension in any_pension(),
        ) {
            let fund = classify_fund(entry, birth, pension, &cutoffs());
            prop_assert!(matches!(fund, None | Some(FundCode::Funprev) | Some(FundCode::Funfin)));
        }

        #[test]
        fn prop_complete_inputs_are_always_defined(
            entry in any_date().prop_filter("present", Option::is_some),
            birth in any_date().prop_filter("present", Option::is_some),
            pension in any_pension().prop_filter("present", Option::is_some),
        ) {
            prop_assert!(classify_fund(entry, birth, pension, &cutoffs()).is_some());
        }

        #[test]
        fn prop_funfin_requires_all_inputs(
            entry in any_date(),
            birth in any_date(),
            pension in any_pension(),
        ) {
            if classify_fund(entry, birth, pension, &cutoffs()) == Some(FundCode::Funfin) {
                prop_assert!(entry.is_some() && birth.is_some());
                prop_assert_eq!(pension, Some(SupplementaryPension::No));
            }
        }
    }
}
