//! Workbook reading through `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use crate::error::{AuditError, AuditResult};

use super::selector::select_sheet;
use super::table::{Cell, Table, parse_date_text};

fn workbook_error(path: &Path, err: impl std::fmt::Display) -> AuditError {
    AuditError::Workbook {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

/// Returns the worksheet names of the workbook at `path`, in workbook order.
pub fn sheet_names(path: &Path) -> AuditResult<Vec<String>> {
    let workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, e))?;
    Ok(workbook.sheet_names())
}

/// Loads the worksheet `sheet` of the workbook at `path`.
///
/// The first row is the header; blank header cells become `Unnamed: N`.
/// A sheet with no rows at all yields an empty table with no columns.
pub fn load_table(path: &Path, sheet: &str) -> AuditResult<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|e| workbook_error(path, e))?;
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| workbook_error(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(idx, data)| header_name(idx, data))
            .collect(),
        None => Vec::new(),
    };
    let data: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    debug!(
        path = %path.display(),
        sheet,
        columns = headers.len(),
        rows = data.len(),
        "Loaded worksheet"
    );
    Ok(Table::new(sheet, headers, data))
}

/// Opens the workbook at `path`, picks the worksheet matching `keyword` and
/// loads it.
pub fn open_matching_sheet(path: &Path, keyword: &str) -> AuditResult<Table> {
    let names = sheet_names(path)?;
    let sheet = select_sheet(&names, keyword)
        .ok_or_else(|| AuditError::EmptyWorkbook {
            path: path.display().to_string(),
        })?
        .to_string();
    info!(sheet = %sheet, "Worksheet selected");
    load_table(path, &sheet)
}

fn header_name(idx: usize, data: &Data) -> String {
    let name = match data {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    };
    if name.is_empty() {
        format!("Unnamed: {idx}")
    } else {
        name
    }
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Int(v) => Cell::Int(*v),
        Data::Float(v) => Cell::Float(*v),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| Cell::Date(d.date()))
            .unwrap_or(Cell::Float(dt.as_f64())),
        Data::DateTimeIso(s) => parse_date_text(s)
            .map(Cell::Date)
            .unwrap_or_else(|| Cell::Text(s.clone())),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_blank_string_is_empty() {
        assert_eq!(convert_cell(&Data::String("   ".to_string())), Cell::Empty);
    }

    #[test]
    fn test_convert_iso_datetime_string() {
        assert_eq!(
            convert_cell(&Data::DateTimeIso("2018-12-27T00:00:00".to_string())),
            Cell::Date(chrono::NaiveDate::from_ymd_opt(2018, 12, 27).unwrap())
        );
    }

    #[test]
    fn test_convert_numbers() {
        assert_eq!(convert_cell(&Data::Int(7)), Cell::Int(7));
        assert_eq!(convert_cell(&Data::Float(1.5)), Cell::Float(1.5));
    }

    #[test]
    fn test_header_name_fills_blank() {
        assert_eq!(header_name(3, &Data::Empty), "Unnamed: 3");
        assert_eq!(
            header_name(0, &Data::String(" NO_ORGAO ".to_string())),
            "NO_ORGAO"
        );
        assert_eq!(header_name(1, &Data::Int(2024)), "2024");
    }

    #[test]
    fn test_open_missing_workbook_is_error() {
        let result = sheet_names(Path::new("/nonexistent/SERVIDOR.xlsx"));
        assert!(matches!(result, Err(AuditError::Workbook { .. })));
    }
}
