//! In-memory tabular structure holding one worksheet.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{AuditError, AuditResult};

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell or cell holding a spreadsheet error.
    Empty,
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Non-blank text.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// Date (time of day dropped).
    Date(NaiveDate),
}

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%d/%m/%Y %H:%M:%S",
];

/// Parses a date written as text, returning `None` for anything unrecognised.
///
/// Slash dates are read day-first, the Brazilian convention.
///
/// # Example
///
/// ```
/// use fund_audit::input::parse_date_text;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date_text("1960-01-31"), NaiveDate::from_ymd_opt(1960, 1, 31));
/// assert_eq!(parse_date_text("31/01/1960"), NaiveDate::from_ymd_opt(1960, 1, 31));
/// assert_eq!(parse_date_text("sem data"), None);
/// ```
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the cell as an identifier or label.
    ///
    /// Whole floats render without a fractional part so that a CPF stored as a
    /// number compares equal to the same CPF stored as an integer.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Int(v) => Some(v.to_string()),
            Cell::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(format!("{v:.0}")),
            Cell::Float(v) => Some(v.to_string()),
            Cell::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Date(d) => Some(d.to_string()),
        }
    }

    /// Returns the cell as an integer category code.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            Cell::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            Cell::Text(s) => {
                let trimmed = s.trim();
                trimmed.parse::<i64>().ok().or_else(|| {
                    trimmed
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite() && v.fract() == 0.0)
                        .map(|v| v as i64)
                })
            }
            _ => None,
        }
    }

    /// Returns the cell as a decimal amount.
    ///
    /// Text accepts either `1234.56` or the Brazilian `1.234,56`.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Cell::Int(v) => Some(Decimal::from(*v)),
            Cell::Float(v) => Decimal::try_from(*v).ok(),
            Cell::Text(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed).ok().or_else(|| {
                    let normalized = trimmed.replace('.', "").replace(',', ".");
                    Decimal::from_str(&normalized).ok()
                })
            }
            _ => None,
        }
    }

    /// Returns the cell as a date; unparseable values become `None`.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            Cell::Text(s) => parse_date_text(s),
            _ => None,
        }
    }
}

static EMPTY: Cell = Cell::Empty;

/// A worksheet loaded into memory: a header row and rectangular data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    sheet: String,
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates a table, padding short rows with empty cells.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_audit::input::{Cell, Table};
    ///
    /// let table = Table::new(
    ///     "SERVIDOR",
    ///     vec!["ID".to_string(), "NOME".to_string()],
    ///     vec![vec![Cell::Int(1)]],
    /// );
    /// assert_eq!(table.len(), 1);
    /// assert!(table.cell(0, 1).is_empty());
    /// ```
    pub fn new(sheet: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Empty);
                row
            })
            .collect();
        Self {
            sheet: sheet.into(),
            headers,
            rows,
        }
    }

    /// Returns the worksheet name.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the index of the column named `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Returns the index of the column named `name`, or `MissingColumn`.
    pub fn require_column(&self, name: &str) -> AuditResult<usize> {
        self.column_index(name).ok_or_else(|| AuditError::MissingColumn {
            column: name.to_string(),
            sheet: self.sheet.clone(),
        })
    }

    /// Renames column `from` to `to`; returns whether a column was renamed.
    pub fn rename_column(&mut self, from: &str, to: &str) -> bool {
        match self.column_index(from) {
            Some(idx) => {
                self.headers[idx] = to.to_string();
                true
            }
            None => false,
        }
    }

    /// Returns the cell at `row`, `col`, or an empty cell when out of range.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&EMPTY)
    }

    /// Iterates over the cells of the column named `name`.
    pub fn column(&self, name: &str) -> AuditResult<impl Iterator<Item = &Cell> + '_> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(move |row| &row[idx]))
    }
}
