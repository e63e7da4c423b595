//! Configuration loading and management for the fund audit reports.
//!
//! This module provides the immutable [`AuditConfig`] passed into every
//! report, with built-in defaults and an optional YAML override file.
//!
//! # Example
//!
//! ```no_run
//! use fund_audit::config::ConfigLoader;
//!
//! let config = ConfigLoader::load_or_default("fund_audit.yaml").unwrap().into_config();
//! println!("Reading workbooks from {}", config.data_dir.display());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use types::{
    AuditConfig, CutoffDates, DEFAULT_CUTOFF_BIRTH, DEFAULT_CUTOFF_ENTRY, DEFAULT_REFERENCE_DATE,
    UndefinedFundPolicies, UndefinedFundPolicy, default_minimum_wage,
};
