//! The typed view of one spreadsheet row.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{FundCode, SupplementaryPension};

/// One person enrolled in one of the retirement funds.
///
/// Every attribute is optional because the source spreadsheets routinely
/// carry blank or malformed cells; parse failures are stored as `None`.
///
/// # Example
///
/// ```
/// use fund_audit::models::{FundCode, Record, SupplementaryPension};
/// use chrono::NaiveDate;
///
/// let record = Record {
///     person_id: Some("12345678900".to_string()),
///     birth_date: NaiveDate::from_ymd_opt(1960, 1, 1),
///     entry_date: NaiveDate::from_ymd_opt(2010, 1, 1),
///     declared_fund: Some(FundCode::Funprev),
///     supplementary_pension: Some(SupplementaryPension::No),
///     ..Record::default()
/// };
/// assert!(record.contribution.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based index of the source row in the loaded table.
    pub index: usize,
    /// National tax ID (CPF); may repeat across rows.
    pub person_id: Option<String>,
    /// Birth date (of the person, or of the instituting servant for pensions).
    pub birth_date: Option<NaiveDate>,
    /// Date of entry into the entity.
    pub entry_date: Option<NaiveDate>,
    /// The fund the spreadsheet declares.
    pub declared_fund: Option<FundCode>,
    /// Supplementary pension adherence.
    pub supplementary_pension: Option<SupplementaryPension>,
    /// Functional status or retirement type code, depending on the dataset.
    pub status_code: Option<i64>,
    /// Monthly contribution value.
    pub contribution: Option<Decimal>,
    /// Agency name (`NO_ORGAO`).
    pub agency: Option<String>,
}

impl Record {
    /// Returns the spreadsheet row number of this record, counting the header
    /// as row 1.
    pub fn sheet_row(&self) -> usize {
        self.index + 2
    }
}
