//! Extraction of typed records from a loaded table.

use crate::datasets::ColumnMap;
use crate::error::AuditResult;
use crate::models::{FundCode, Record, SupplementaryPension};

use super::table::{Cell, Table};

/// Decodes a declared fund cell holding either a numeric code or a label.
pub fn declared_fund(cell: &Cell) -> Option<FundCode> {
    cell.as_code()
        .and_then(FundCode::from_code)
        .or_else(|| cell.as_text().and_then(|text| FundCode::from_label(&text)))
}

/// Builds one [`Record`] per table row using the column names in `columns`.
///
/// # Errors
///
/// Returns `MissingColumn` if any mapped column is absent from the table.
pub fn extract_records(table: &Table, columns: &ColumnMap) -> AuditResult<Vec<Record>> {
    let person_id = table.require_column(columns.person_id)?;
    let birth_date = table.require_column(columns.birth_date)?;
    let declared = table.require_column(columns.declared_fund)?;
    let contribution = table.require_column(columns.contribution)?;
    let agency = table.require_column(columns.agency)?;
    let entry_date = optional(table, columns.entry_date)?;
    let pension = optional(table, columns.supplementary_pension)?;
    let status = optional(table, columns.status)?;

    let records = (0..table.len())
        .map(|row| Record {
            index: row,
            person_id: table.cell(row, person_id).as_text(),
            birth_date: table.cell(row, birth_date).as_date(),
            entry_date: entry_date.and_then(|col| table.cell(row, col).as_date()),
            declared_fund: declared_fund(table.cell(row, declared)),
            supplementary_pension: pension.and_then(|col| {
                table
                    .cell(row, col)
                    .as_code()
                    .and_then(SupplementaryPension::from_code)
            }),
            status_code: status.and_then(|col| table.cell(row, col).as_code()),
            contribution: table.cell(row, contribution).as_decimal(),
            agency: table.cell(row, agency).as_text(),
        })
        .collect();

    Ok(records)
}

fn optional(table: &Table, name: Option<&str>) -> AuditResult<Option<usize>> {
    name.map(|n| table.require_column(n)).transpose()
}
