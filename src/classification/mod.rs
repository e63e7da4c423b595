//! Classification logic for the fund audit reports.
//!
//! This module derives, for each record, the computed fund, the
//! declared-versus-computed compatibility, the duplicate ID flag and the
//! scenario of incompatible records. It also derives ages for the
//! exploratory profile.

mod ages;
mod compatibility;
mod duplicates;
mod fund_rule;
mod pensioner_rule;
mod scenario;

pub use ages::{DAYS_PER_YEAR, years_between};
pub use compatibility::check_compatibility;
pub use duplicates::{count_repeated_occurrences, duplicate_flags};
pub use fund_rule::{FundDecision, FundRule, classify_fund, decide_fund};
pub use pensioner_rule::{classify_pensioner_fund, pensioner_compatibility};
pub use scenario::assign_scenario;

use tracing::{debug, trace};

use crate::config::{AuditConfig, UndefinedFundPolicy};
use crate::models::{Classification, ClassifiedRecord, Record};

/// Which eligibility rule a dataset is classified with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FundRuleKind {
    /// Entry date, birth date and supplementary pension flag, with scenario
    /// refinement keyed on `active_status`.
    EntryBirthPension {
        /// Status code counted as active for Scenario 2.
        active_status: i64,
    },
    /// Instituting servant's birth date only; no scenarios.
    InstitutorBirth,
}

/// Classifies one record.
///
/// `duplicate_id` must come from [`duplicate_flags`] over the full table.
///
/// # Example
///
/// ```
/// use fund_audit::classification::{FundRuleKind, classify};
/// use fund_audit::config::AuditConfig;
/// use fund_audit::models::{Compatibility, FundCode, Record, Scenario, SupplementaryPension};
/// use chrono::NaiveDate;
///
/// let record = Record {
///     entry_date: NaiveDate::from_ymd_opt(2010, 1, 1),
///     birth_date: NaiveDate::from_ymd_opt(1960, 1, 1),
///     supplementary_pension: Some(SupplementaryPension::No),
///     declared_fund: Some(FundCode::Funprev),
///     ..Record::default()
/// };
/// let rule = FundRuleKind::EntryBirthPension { active_status: 1 };
/// let result = classify(&record, false, rule, &AuditConfig::default());
///
/// assert_eq!(result.computed_fund, Some(FundCode::Funfin));
/// assert_eq!(result.compatibility, Compatibility::Incompatible);
/// assert_eq!(result.scenario, Some(Scenario::Scenario1));
/// ```
pub fn classify(
    record: &Record,
    duplicate_id: bool,
    rule: FundRuleKind,
    config: &AuditConfig,
) -> Classification {
    match rule {
        FundRuleKind::EntryBirthPension { active_status } => {
            let decision = decide_fund(
                record.entry_date,
                record.birth_date,
                record.supplementary_pension,
                &config.cutoffs,
            );
            trace!(
                row = record.sheet_row(),
                rule = decision.rule.description(),
                "Fund decided"
            );
            let compatibility = check_compatibility(record.declared_fund, decision.fund);
            Classification {
                computed_fund: decision.fund,
                compatibility,
                duplicate_id,
                scenario: assign_scenario(
                    compatibility,
                    duplicate_id,
                    record.status_code,
                    active_status,
                ),
            }
        }
        FundRuleKind::InstitutorBirth => {
            let computed = classify_pensioner_fund(record.birth_date, config.cutoffs.birth);
            Classification {
                computed_fund: computed,
                compatibility: pensioner_compatibility(record.declared_fund, computed),
                duplicate_id,
                scenario: None,
            }
        }
    }
}

/// The classified records of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedTable {
    /// Records kept for aggregation and output, in table order.
    pub records: Vec<ClassifiedRecord>,
    /// Number of undefined-fund records dropped under
    /// [`UndefinedFundPolicy::Exclude`].
    pub excluded: usize,
}

/// Classifies every record of a table.
///
/// Duplicate IDs are detected over all of `records`, before any exclusion.
pub fn classify_all(
    records: Vec<Record>,
    rule: FundRuleKind,
    policy: UndefinedFundPolicy,
    config: &AuditConfig,
) -> ClassifiedTable {
    let flags = {
        let ids: Vec<Option<&str>> = records.iter().map(|r| r.person_id.as_deref()).collect();
        duplicate_flags(&ids)
    };

    let mut excluded = 0;
    let mut classified = Vec::with_capacity(records.len());
    for (record, duplicate_id) in records.into_iter().zip(flags) {
        let classification = classify(&record, duplicate_id, rule, config);
        if classification.computed_fund.is_none() && policy == UndefinedFundPolicy::Exclude {
            excluded += 1;
            continue;
        }
        classified.push(ClassifiedRecord {
            record,
            classification,
        });
    }

    debug!(
        kept = classified.len(),
        excluded,
        ?policy,
        "Classification complete"
    );
    ClassifiedTable {
        records: classified,
        excluded,
    }
}
