//! Pension Fund Audit for Public-Sector Payroll Spreadsheets
//!
//! This crate reads civil servant, retiree and pensioner workbooks, computes
//! which retirement fund (FUNPREV or FUNFIN) each person belongs to from
//! their entry and birth dates, cross-checks it against the declared fund and
//! writes a derived spreadsheet plus a Portuguese text summary.

#![warn(missing_docs)]

pub mod aggregation;
pub mod classification;
pub mod cli;
pub mod config;
pub mod datasets;
pub mod error;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod report;
