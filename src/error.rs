//! Error types for the fund audit reports.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that aborts a report run. Data-level problems such as
//! unparseable dates never surface here; they become missing values instead.

use thiserror::Error;

/// The main error type for the fund audit reports.
///
/// # Example
///
/// ```
/// use fund_audit::error::AuditError;
///
/// let error = AuditError::InputNotFound {
///     keyword: "servidor".to_string(),
///     dir: "dados".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "No .xlsx file containing 'servidor' found in dados"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// The data directory does not exist.
    #[error("Data directory not found: {path}")]
    DataDirNotFound {
        /// The directory that was expected.
        path: String,
    },

    /// No spreadsheet in the data directory matched the dataset keyword.
    #[error("No .xlsx file containing '{keyword}' found in {dir}")]
    InputNotFound {
        /// The keyword searched for in file names.
        keyword: String,
        /// The directory that was scanned.
        dir: String,
    },

    /// The workbook could not be opened or a worksheet could not be read.
    #[error("Failed to read workbook '{path}': {message}")]
    Workbook {
        /// The workbook path.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The workbook contains no worksheets.
    #[error("Workbook '{path}' has no worksheets")]
    EmptyWorkbook {
        /// The workbook path.
        path: String,
    },

    /// A column the report depends on is absent from the worksheet.
    #[error("Column '{column}' not found in sheet '{sheet}'")]
    MissingColumn {
        /// The missing column header.
        column: String,
        /// The worksheet that was searched.
        sheet: String,
    },

    /// The output spreadsheet could not be written.
    #[error("Failed to write spreadsheet '{path}': {message}")]
    Spreadsheet {
        /// The output path.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path involved.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl AuditError {
    /// Builds an [`AuditError::Io`] from a path and an `std::io::Error`.
    pub fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;
