//! Configuration types for the fund audit reports.
//!
//! Every field has a built-in default matching the fixed constants the reports
//! run with, so a configuration file only needs to name what it overrides.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Entry-into-entity cutoff of the pension reform (inclusive on the FUNFIN side).
pub const DEFAULT_CUTOFF_ENTRY: NaiveDate = ymd(2018, 12, 27);

/// Birth-date cutoff of the age grandfathering rule.
pub const DEFAULT_CUTOFF_BIRTH: NaiveDate = ymd(1957, 2, 28);

/// Date ages are measured against in the exploratory report.
pub const DEFAULT_REFERENCE_DATE: NaiveDate = ymd(2025, 9, 1);

/// Default national minimum wage, in BRL.
pub fn default_minimum_wage() -> Decimal {
    Decimal::new(1631, 0)
}

/// What happens to records whose computed fund is undefined.
///
/// The fund audits disagree on this: the servant and retiree reports keep such
/// records and count them as incompatible, while the pensioner report drops them
/// before any counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedFundPolicy {
    /// Keep the record; it is incompatible and receives a scenario.
    #[default]
    CountAsIncompatible,
    /// Drop the record before compatibility, aggregation and output.
    Exclude,
}

/// The pair of cutoff dates used by the fund-eligibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutoffDates {
    /// Entry-into-entity cutoff.
    pub entry: NaiveDate,
    /// Birth-date cutoff.
    pub birth: NaiveDate,
}

impl Default for CutoffDates {
    fn default() -> Self {
        Self {
            entry: DEFAULT_CUTOFF_ENTRY,
            birth: DEFAULT_CUTOFF_BIRTH,
        }
    }
}

/// Undefined-fund policy per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UndefinedFundPolicies {
    /// Policy for active civil servants.
    pub servidores: UndefinedFundPolicy,
    /// Policy for retirees.
    pub aposentados: UndefinedFundPolicy,
    /// Policy for pensioners.
    pub pensionistas: UndefinedFundPolicy,
}

impl Default for UndefinedFundPolicies {
    fn default() -> Self {
        Self {
            servidores: UndefinedFundPolicy::CountAsIncompatible,
            aposentados: UndefinedFundPolicy::CountAsIncompatible,
            pensionistas: UndefinedFundPolicy::Exclude,
        }
    }
}

/// The complete, immutable configuration of a report run.
///
/// # Example
///
/// ```
/// use fund_audit::config::{AuditConfig, UndefinedFundPolicy};
/// use chrono::NaiveDate;
///
/// let config = AuditConfig::default();
/// assert_eq!(config.cutoffs.entry, NaiveDate::from_ymd_opt(2018, 12, 27).unwrap());
/// assert_eq!(config.undefined_fund.pensionistas, UndefinedFundPolicy::Exclude);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Cutoff dates of the eligibility rule.
    pub cutoffs: CutoffDates,
    /// Date current ages are computed at.
    pub reference_date: NaiveDate,
    /// Minimum wage used by the exploratory salary checks.
    pub minimum_wage: Decimal,
    /// Directory scanned for input workbooks.
    pub data_dir: PathBuf,
    /// Directory the reports are written to.
    pub results_dir: PathBuf,
    /// Undefined-fund policy per dataset.
    pub undefined_fund: UndefinedFundPolicies,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            cutoffs: CutoffDates::default(),
            reference_date: DEFAULT_REFERENCE_DATE,
            minimum_wage: default_minimum_wage(),
            data_dir: PathBuf::from("dados"),
            results_dir: PathBuf::from("resultados"),
            undefined_fund: UndefinedFundPolicies::default(),
        }
    }
}
