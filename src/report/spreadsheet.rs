//! Derived spreadsheet output through `rust_xlsxwriter`.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::debug;

use crate::error::{AuditError, AuditResult};
use crate::input::{Cell, Table, declared_fund};
use crate::models::{ClassifiedRecord, Vocabulary};

/// Header of the duplicate ID column.
pub const DUPLICATE_ID_HEADER: &str = "CPF_DUPLICADO";
/// Header of the computed fund column.
pub const COMPUTED_FUND_HEADER: &str = "CALCULO_FUNDO";
/// Header of the compatibility column.
pub const COMPATIBILITY_HEADER: &str = "COMPATIBILIDADE_FUNDO";
/// Header of the scenario column.
pub const SCENARIO_HEADER: &str = "CENARIO_FUNDO";

const DATE_FORMAT: &str = "yyyy-mm-dd";

/// One column of the spreadsheet projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputColumn {
    /// Source column copied as is.
    Raw(&'static str),
    /// Source column written as a date cell.
    Date(&'static str),
    /// Source code column written as its label.
    Decoded(&'static str, Vocabulary),
    /// Duplicate ID flag.
    DuplicateId,
    /// Computed fund label.
    ComputedFund,
    /// `compativel` or `incompativel`.
    Compatibility,
    /// Scenario label, blank without scenario.
    Scenario,
}

impl OutputColumn {
    /// Returns the header written for this column.
    pub fn header(self) -> &'static str {
        match self {
            Self::Raw(name) | Self::Date(name) | Self::Decoded(name, _) => name,
            Self::DuplicateId => DUPLICATE_ID_HEADER,
            Self::ComputedFund => COMPUTED_FUND_HEADER,
            Self::Compatibility => COMPATIBILITY_HEADER,
            Self::Scenario => SCENARIO_HEADER,
        }
    }

    /// Returns the source column this column reads, if any.
    pub fn source(self) -> Option<&'static str> {
        match self {
            Self::Raw(name) | Self::Date(name) | Self::Decoded(name, _) => Some(name),
            _ => None,
        }
    }
}

/// A projected cell, ready to be written.
#[derive(Debug, Clone, PartialEq)]
enum OutputValue {
    Blank,
    Number(f64),
    Text(String),
    Bool(bool),
    Date(chrono::NaiveDate),
}

impl From<&Cell> for OutputValue {
    fn from(cell: &Cell) -> Self {
        match cell {
            Cell::Empty => Self::Blank,
            Cell::Int(v) => Self::Number(*v as f64),
            Cell::Float(v) => Self::Number(*v),
            Cell::Text(s) => Self::Text(s.clone()),
            Cell::Bool(b) => Self::Bool(*b),
            Cell::Date(d) => Self::Date(*d),
        }
    }
}

fn label(text: Option<&str>) -> OutputValue {
    text.map_or(OutputValue::Blank, |t| OutputValue::Text(t.to_string()))
}

fn project(
    column: OutputColumn,
    source: Option<&Cell>,
    classified: &ClassifiedRecord,
) -> OutputValue {
    let c = &classified.classification;
    match (column, source) {
        (OutputColumn::Raw(_), Some(cell)) => cell.into(),
        (OutputColumn::Date(_), Some(cell)) => cell
            .as_date()
            .map_or(OutputValue::Blank, OutputValue::Date),
        (OutputColumn::Decoded(_, Vocabulary::Fund), Some(cell)) => {
            label(declared_fund(cell).map(|f| f.label()))
        }
        (OutputColumn::Decoded(_, vocabulary), Some(cell)) => {
            label(cell.as_code().and_then(|code| vocabulary.label(code)))
        }
        (OutputColumn::DuplicateId, _) => OutputValue::Bool(c.duplicate_id),
        (OutputColumn::ComputedFund, _) => label(c.computed_fund.map(|f| f.label())),
        (OutputColumn::Compatibility, _) => label(Some(c.compatibility.label())),
        (OutputColumn::Scenario, _) => label(c.scenario.map(|s| s.label())),
        (_, None) => OutputValue::Blank,
    }
}

fn spreadsheet_error(path: &Path, err: XlsxError) -> AuditError {
    AuditError::Spreadsheet {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &OutputValue,
    date_format: &Format,
) -> Result<(), XlsxError> {
    match value {
        OutputValue::Blank => {}
        OutputValue::Number(v) => {
            sheet.write_number(row, col, *v)?;
        }
        OutputValue::Text(s) => {
            sheet.write_string(row, col, s)?;
        }
        OutputValue::Bool(b) => {
            sheet.write_boolean(row, col, *b)?;
        }
        OutputValue::Date(d) => {
            sheet.write_datetime_with_format(row, col, d, date_format)?;
        }
    }
    Ok(())
}

/// Writes `records` projected through `columns` to a new workbook at `path`.
///
/// Source cells are looked up in `table` by each record's row index.
///
/// # Errors
///
/// Returns `MissingColumn` when a source column is absent from `table`, and
/// `Spreadsheet` when the workbook cannot be written.
pub fn write_spreadsheet(
    path: &Path,
    table: &Table,
    records: &[ClassifiedRecord],
    columns: &[OutputColumn],
) -> AuditResult<()> {
    let sources = columns
        .iter()
        .map(|column| column.source().map(|name| table.require_column(name)).transpose())
        .collect::<AuditResult<Vec<Option<usize>>>>()?;

    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let date_format = Format::new().set_num_format(DATE_FORMAT);

    let sheet = workbook.add_worksheet();
    for (col, column) in (0u16..).zip(columns) {
        sheet
            .write_string_with_format(0, col, column.header(), &header_format)
            .map_err(|e| spreadsheet_error(path, e))?;
    }

    for (row, classified) in (1u32..).zip(records) {
        for ((col, column), source) in (0u16..).zip(columns).zip(&sources) {
            let cell = source.map(|idx| table.cell(classified.record.index, idx));
            let value = project(*column, cell, classified);
            write_value(sheet, row, col, &value, &date_format)
                .map_err(|e| spreadsheet_error(path, e))?;
        }
    }

    workbook.save(path).map_err(|e| spreadsheet_error(path, e))?;
    debug!(path = %path.display(), rows = records.len(), "Spreadsheet written");
    Ok(())
}
