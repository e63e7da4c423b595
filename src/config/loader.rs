//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading an
//! [`AuditConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{AuditError, AuditResult};

use super::types::AuditConfig;

/// Default configuration file name looked up by the report binaries.
pub const DEFAULT_CONFIG_FILE: &str = "fund_audit.yaml";

/// Loads and provides access to the audit configuration.
///
/// A configuration file is a single YAML document whose keys mirror
/// [`AuditConfig`]. Absent keys keep their built-in defaults:
///
/// ```text
/// cutoffs:
///   entry: 2018-12-27
///   birth: 1957-02-28
/// reference_date: 2025-09-01
/// minimum_wage: 1631
/// data_dir: dados
/// results_dir: resultados
/// undefined_fund:
///   pensionistas: exclude
/// ```
///
/// # Example
///
/// ```no_run
/// use fund_audit::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./fund_audit.yaml")?;
/// println!("Entry cutoff: {}", loader.config().cutoffs.entry);
/// # Ok::<(), fund_audit::error::AuditError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AuditConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or invalid values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<AuditConfig>(path)?;
        Self::validate(path, &config)?;

        debug!(path = %path.display(), "Loaded configuration file");
        Ok(Self { config })
    }

    /// Loads configuration from `path` if it exists, otherwise uses the
    /// built-in defaults.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }

        info!(path = %path.display(), "No configuration file, using built-in defaults");
        Ok(Self {
            config: AuditConfig::default(),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AuditResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AuditError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AuditError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(path: &Path, config: &AuditConfig) -> AuditResult<()> {
        if config.minimum_wage.is_sign_negative() {
            return Err(AuditError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("minimum_wage must not be negative, got {}", config.minimum_wage),
            });
        }
        if config.cutoffs.birth >= config.cutoffs.entry {
            return Err(AuditError::ConfigParseError {
                path: path.display().to_string(),
                message: format!(
                    "birth cutoff {} must precede entry cutoff {}",
                    config.cutoffs.birth, config.cutoffs.entry
                ),
            });
        }
        Ok(())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AuditConfig {
        self.config
    }
}
