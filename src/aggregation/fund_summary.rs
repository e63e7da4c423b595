//! Aggregate figures of a classified dataset.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::classification::ClassifiedTable;
use crate::models::Scenario;

use super::counts::value_counts;
use super::stats::sum_present;

/// Counts and totals printed by the fund audit reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundSummary {
    /// Records analysed (after any exclusion).
    pub total: usize,
    /// Compatible records.
    pub compatible: usize,
    /// Incompatible records.
    pub incompatible: usize,
    /// Records whose ID is duplicated.
    pub duplicate_records: usize,
    /// Distinct IDs occurring more than once.
    pub duplicate_ids: usize,
    /// Incompatible records per declared fund label.
    pub incompatible_by_fund: Vec<(String, usize)>,
    /// Incompatible records per agency.
    pub incompatible_by_agency: Vec<(String, usize)>,
    /// Incompatible records per scenario, in [`Scenario::ALL`] order.
    pub scenarios: [usize; 3],
    /// Sum of contributions over incompatible records.
    pub incompatible_contribution: Decimal,
    /// Records with a missing contribution.
    pub missing_contribution: usize,
    /// Undefined-fund records dropped before analysis.
    pub excluded: usize,
}

impl FundSummary {
    /// Aggregates a classified table.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_audit::aggregation::FundSummary;
    /// use fund_audit::classification::ClassifiedTable;
    ///
    /// let summary = FundSummary::from_table(&ClassifiedTable { records: vec![], excluded: 0 });
    /// assert_eq!(summary.total, 0);
    /// assert_eq!(summary.compatible + summary.incompatible, summary.total);
    /// ```
    pub fn from_table(table: &ClassifiedTable) -> Self {
        let records = &table.records;
        let incompatible: Vec<_> = records.iter().filter(|r| r.is_incompatible()).collect();

        let mut scenarios = [0; 3];
        for scenario in incompatible.iter().filter_map(|r| r.classification.scenario) {
            scenarios[usize::from(scenario.number() - 1)] += 1;
        }

        let duplicate_records = records
            .iter()
            .filter(|r| r.classification.duplicate_id)
            .count();
        let duplicate_ids = value_counts(
            records
                .iter()
                .filter(|r| r.classification.duplicate_id)
                .map(|r| r.record.person_id.as_deref()),
        )
        .len();

        Self {
            total: records.len(),
            compatible: records.len() - incompatible.len(),
            incompatible: incompatible.len(),
            duplicate_records,
            duplicate_ids,
            incompatible_by_fund: value_counts(
                incompatible
                    .iter()
                    .map(|r| r.record.declared_fund.map(|f| f.label().to_string())),
            ),
            incompatible_by_agency: value_counts(
                incompatible.iter().map(|r| r.record.agency.clone()),
            ),
            scenarios,
            incompatible_contribution: sum_present(
                incompatible.iter().map(|r| r.record.contribution),
            ),
            missing_contribution: records
                .iter()
                .filter(|r| r.record.contribution.is_none())
                .count(),
            excluded: table.excluded,
        }
    }

    /// Returns the count of `scenario`.
    pub fn scenario_count(&self, scenario: Scenario) -> usize {
        self.scenarios[usize::from(scenario.number() - 1)]
    }
}
