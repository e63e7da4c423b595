//! Exploratory profile of the civil servant table.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::classification::{count_repeated_occurrences, years_between};
use crate::config::AuditConfig;
use crate::error::AuditResult;
use crate::input::{Cell, Table, declared_fund};
use crate::models::Vocabulary;

use super::counts::value_counts;
use super::stats::Describe;

/// Source columns read by the exploratory profile.
pub mod columns {
    /// Declared fund code.
    pub const FUND: &str = "CO_TIPO_FUNDO";
    /// Agency name.
    pub const AGENCY: &str = "NO_ORGAO";
    /// Position type code.
    pub const POSITION_TYPE: &str = "CO_TIPO_CARGO";
    /// Servant tax ID.
    pub const PERSON_ID: &str = "ID_SERVIDOR_CPF";
    /// Sex code.
    pub const SEX: &str = "CO_SEXO_SERVIDOR";
    /// Marital status code.
    pub const MARITAL_STATUS: &str = "CO_EST_CIVIL_SERVIDOR";
    /// Functional status code.
    pub const STATUS: &str = "CO_SITUACAO_FUNCIONAL";
    /// Birth date.
    pub const BIRTH_DATE: &str = "DT_NASC_SERVIDOR";
    /// Entry date into public service.
    pub const PUBLIC_SERVICE_ENTRY: &str = "DT_ING_SERV_PUB";
    /// Entry date into the entity.
    pub const ENTITY_ENTRY: &str = "DT_ING_ENTE";
    /// Contribution calculation base.
    pub const CALCULATION_BASE: &str = "VL_BASE_CALCULO";
    /// Specific ceiling.
    pub const CEILING: &str = "VL_TETO_ESPECIFICO";
    /// Remuneration.
    pub const REMUNERATION: &str = "VL_REMUNERACAO";
    /// Permanence bonus flag.
    pub const PERMANENCE_BONUS: &str = "IN_ABONO_PERMANENCIA";
    /// Supplementary pension flag.
    pub const SUPPLEMENTARY_PENSION: &str = "IN_PREV_COMP";
}

/// Age below which an entry is flagged.
pub const MINIMUM_ENTRY_AGE: i64 = 18;

const YES: i64 = 1;
const NO: i64 = 2;

/// The figures of the exploratory servant report.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploratoryProfile {
    /// Number of data rows.
    pub total_lines: usize,
    /// Servants per declared fund label.
    pub by_fund: Vec<(String, usize)>,
    /// Servants per agency.
    pub by_agency: Vec<(String, usize)>,
    /// Servants per position type label.
    pub by_position_type: Vec<(String, usize)>,
    /// Rows beyond the first for each repeated CPF.
    pub repeated_ids: usize,
    /// Servants per sex label.
    pub by_sex: Vec<(String, usize)>,
    /// Servants per marital status label.
    pub by_marital_status: Vec<(String, usize)>,
    /// Servants per functional status label.
    pub by_status: Vec<(String, usize)>,
    /// Current age at the reference date.
    pub age: Describe,
    /// Age at entry into public service.
    pub public_service_entry_age: Describe,
    /// Entries into public service before age 18.
    pub public_service_entries_under_18: usize,
    /// Age at entry into the entity.
    pub entity_entry_age: Describe,
    /// Entries into the entity before age 18.
    pub entity_entries_under_18: usize,
    /// Calculation base below the minimum wage.
    pub base_below_minimum: usize,
    /// Calculation base above the specific ceiling.
    pub base_above_ceiling: usize,
    /// Remuneration below the minimum wage.
    pub remuneration_below_minimum: usize,
    /// Remuneration above the specific ceiling.
    pub remuneration_above_ceiling: usize,
    /// Permanence bonus granted.
    pub permanence_bonus_yes: usize,
    /// Permanence bonus not granted.
    pub permanence_bonus_no: usize,
    /// Supplementary pension adhered.
    pub supplementary_pension_yes: usize,
    /// Supplementary pension not adhered.
    pub supplementary_pension_no: usize,
}

impl ExploratoryProfile {
    /// Profiles the servant table.
    ///
    /// # Errors
    ///
    /// Returns `MissingColumn` when any profiled column is absent.
    pub fn from_table(table: &Table, config: &AuditConfig) -> AuditResult<Self> {
        use columns::*;

        let births = dates(table, BIRTH_DATE)?;
        let public_entries = dates(table, PUBLIC_SERVICE_ENTRY)?;
        let entity_entries = dates(table, ENTITY_ENTRY)?;

        let ages: Vec<Option<i64>> = births
            .iter()
            .map(|&b| years_between(b, Some(config.reference_date)))
            .collect();
        let public_entry_ages = entry_ages(&births, &public_entries);
        let entity_entry_ages = entry_ages(&births, &entity_entries);

        let ids: Vec<Option<String>> = table.column(PERSON_ID)?.map(Cell::as_text).collect();
        let ids: Vec<Option<&str>> = ids.iter().map(Option::as_deref).collect();

        let base = amounts(table, CALCULATION_BASE)?;
        let ceiling = amounts(table, CEILING)?;
        let remuneration = amounts(table, REMUNERATION)?;
        let bonus = codes(table, PERMANENCE_BONUS)?;
        let pension = codes(table, SUPPLEMENTARY_PENSION)?;

        Ok(Self {
            total_lines: table.len(),
            by_fund: value_counts(
                table
                    .column(FUND)?
                    .map(|c| declared_fund(c).map(|f| f.label().to_string())),
            ),
            by_agency: value_counts(table.column(AGENCY)?.map(Cell::as_text)),
            by_position_type: decoded_counts(table, POSITION_TYPE, Vocabulary::PositionType)?,
            repeated_ids: count_repeated_occurrences(&ids),
            by_sex: decoded_counts(table, SEX, Vocabulary::Sex)?,
            by_marital_status: decoded_counts(table, MARITAL_STATUS, Vocabulary::MaritalStatus)?,
            by_status: decoded_counts(table, STATUS, Vocabulary::FunctionalStatus)?,
            age: describe_ages(&ages),
            public_service_entry_age: describe_ages(&public_entry_ages),
            public_service_entries_under_18: count_under(&public_entry_ages, MINIMUM_ENTRY_AGE),
            entity_entry_age: describe_ages(&entity_entry_ages),
            entity_entries_under_18: count_under(&entity_entry_ages, MINIMUM_ENTRY_AGE),
            base_below_minimum: count_below(&base, config.minimum_wage),
            base_above_ceiling: count_above(&base, &ceiling),
            remuneration_below_minimum: count_below(&remuneration, config.minimum_wage),
            remuneration_above_ceiling: count_above(&remuneration, &ceiling),
            permanence_bonus_yes: count_code(&bonus, YES),
            permanence_bonus_no: count_code(&bonus, NO),
            supplementary_pension_yes: count_code(&pension, YES),
            supplementary_pension_no: count_code(&pension, NO),
        })
    }
}

fn dates(table: &Table, name: &str) -> AuditResult<Vec<Option<NaiveDate>>> {
    Ok(table.column(name)?.map(Cell::as_date).collect())
}

fn amounts(table: &Table, name: &str) -> AuditResult<Vec<Option<Decimal>>> {
    Ok(table.column(name)?.map(Cell::as_decimal).collect())
}

fn codes(table: &Table, name: &str) -> AuditResult<Vec<Option<i64>>> {
    Ok(table.column(name)?.map(Cell::as_code).collect())
}

fn decoded_counts(
    table: &Table,
    name: &str,
    vocabulary: Vocabulary,
) -> AuditResult<Vec<(String, usize)>> {
    Ok(value_counts(table.column(name)?.map(|cell| {
        cell.as_code()
            .and_then(|code| vocabulary.label(code))
            .map(str::to_string)
    })))
}

fn entry_ages(births: &[Option<NaiveDate>], entries: &[Option<NaiveDate>]) -> Vec<Option<i64>> {
    births
        .iter()
        .zip(entries)
        .map(|(&birth, &entry)| years_between(birth, entry))
        .collect()
}

fn describe_ages(ages: &[Option<i64>]) -> Describe {
    Describe::from_values(ages.iter().map(|age| age.map(|a| a as f64)))
}

fn count_under(ages: &[Option<i64>], limit: i64) -> usize {
    ages.iter().flatten().filter(|&&age| age < limit).count()
}

fn count_below(values: &[Option<Decimal>], limit: Decimal) -> usize {
    values.iter().flatten().filter(|&&v| v < limit).count()
}

fn count_above(values: &[Option<Decimal>], limits: &[Option<Decimal>]) -> usize {
    values
        .iter()
        .zip(limits)
        .filter(|&(v, l)| matches!((v, l), (Some(v), Some(l)) if v > l))
        .count()
}

fn count_code(codes: &[Option<i64>], code: i64) -> usize {
    codes.iter().filter(|&&c| c == Some(code)).count()
}
