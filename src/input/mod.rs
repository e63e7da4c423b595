//! Input selection and loading.
//!
//! This module finds the workbook to analyse, reads the chosen worksheet
//! into a [`Table`] and extracts typed [`crate::models::Record`]s from it.

mod records;
mod selector;
mod table;
mod workbook;

pub use records::{declared_fund, extract_records};
pub use selector::{select_input_file, select_sheet};
pub use table::{Cell, Table, parse_date_text};
pub use workbook::{load_table, open_matching_sheet, sheet_names};
