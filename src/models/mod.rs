//! Core data models for the fund audit reports.
//!
//! This module contains the record type, the code vocabularies and the
//! derived classification fields.

mod classification;
mod codes;
mod record;

pub use classification::{Classification, ClassifiedRecord, Compatibility, Scenario};
pub use codes::{FundCode, SupplementaryPension, Vocabulary};
pub use record::Record;
