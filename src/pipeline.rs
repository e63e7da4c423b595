//! End-to-end report runs.
//!
//! A run selects the newest matching workbook, loads the worksheet,
//! classifies and aggregates its records, and writes the outputs to the
//! results directory. Every stage logs with the run ID.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{ExploratoryProfile, FundSummary};
use crate::classification::classify_all;
use crate::config::AuditConfig;
use crate::datasets::{DatasetKind, apply_aliases};
use crate::error::{AuditError, AuditResult};
use crate::input::{Table, extract_records, open_matching_sheet, select_input_file};
use crate::models::ClassifiedRecord;
use crate::report::{render_exploratory_report, render_fund_report, report_text, write_spreadsheet};

/// File name of the exploratory servant report.
pub const EXPLORATORY_REPORT_FILE: &str = "SERVIDOR_analise_exploratoria.txt";

/// The outcome of one report run.
#[derive(Debug, Clone)]
pub struct AuditRun {
    /// Unique ID of the run, attached to every log line.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// The workbook analysed.
    pub input: PathBuf,
    /// The worksheet analysed.
    pub sheet: String,
    /// The derived spreadsheet, when the report writes one.
    pub spreadsheet: Option<PathBuf>,
    /// The text report.
    pub report: PathBuf,
    /// The text report body.
    pub text: String,
    /// Aggregate figures of a fund audit; `None` for the exploratory report.
    pub summary: Option<FundSummary>,
}

fn start_run() -> (Uuid, DateTime<Utc>) {
    (Uuid::new_v4(), Utc::now())
}

fn load_input(run_id: Uuid, config: &AuditConfig, keyword: &str) -> AuditResult<(PathBuf, Table)> {
    let input = select_input_file(&config.data_dir, keyword)?;
    let table = open_matching_sheet(&input, keyword)?;
    info!(
        run_id = %run_id,
        path = %input.display(),
        sheet = table.sheet(),
        rows = table.len(),
        "Input loaded"
    );
    Ok((input, table))
}

fn prepare_results_dir(dir: &Path) -> AuditResult<()> {
    fs::create_dir_all(dir).map_err(|e| AuditError::io(dir, &e))
}

fn write_text(path: &Path, text: &str) -> AuditResult<()> {
    fs::write(path, text).map_err(|e| AuditError::io(path, &e))
}

/// Runs the fund audit of `kind`.
///
/// # Errors
///
/// Fails before writing anything when the data directory or a matching
/// workbook is missing, or when the worksheet lacks a required column.
pub fn run_fund_audit(kind: DatasetKind, config: &AuditConfig) -> AuditResult<AuditRun> {
    let (run_id, started_at) = start_run();
    let profile = kind.profile();
    info!(run_id = %run_id, dataset = %kind, "Starting fund audit");

    let (input, mut table) = load_input(run_id, config, profile.keyword)?;
    apply_aliases(&mut table, &profile);
    let records = extract_records(&table, &profile.columns)?;

    let policy = kind.undefined_policy(config);
    let classified = classify_all(records, profile.rule, policy, config);
    if classified.excluded > 0 {
        info!(
            run_id = %run_id,
            excluded = classified.excluded,
            ?policy,
            "Undefined-fund records excluded"
        );
    }

    let summary = FundSummary::from_table(&classified);
    if summary.total == 0 {
        warn!(run_id = %run_id, "No records to analyse, percentages reported as zero");
    }
    info!(
        run_id = %run_id,
        total = summary.total,
        compatible = summary.compatible,
        incompatible = summary.incompatible,
        duplicates = summary.duplicate_records,
        duplicate_ids = summary.duplicate_ids,
        "Classification summary"
    );

    prepare_results_dir(&config.results_dir)?;

    let rows: Vec<ClassifiedRecord> = if profile.incompatible_only_output {
        classified
            .records
            .iter()
            .filter(|r| r.is_incompatible())
            .cloned()
            .collect()
    } else {
        classified.records.clone()
    };
    let spreadsheet = config.results_dir.join(profile.spreadsheet_file);
    write_spreadsheet(&spreadsheet, &table, &rows, &profile.output)?;

    let text = report_text(&render_fund_report(kind, &summary, profile.top_agencies));
    let report = config.results_dir.join(profile.report_file);
    write_text(&report, &text)?;

    info!(
        run_id = %run_id,
        spreadsheet = %spreadsheet.display(),
        report = %report.display(),
        "Fund audit complete"
    );
    Ok(AuditRun {
        run_id,
        started_at,
        input,
        sheet: table.sheet().to_string(),
        spreadsheet: Some(spreadsheet),
        report,
        text,
        summary: Some(summary),
    })
}

/// Runs the exploratory profile of the civil servant workbook.
///
/// # Errors
///
/// Fails when the input is missing or lacks a profiled column.
pub fn run_exploratory(config: &AuditConfig) -> AuditResult<AuditRun> {
    let (run_id, started_at) = start_run();
    info!(run_id = %run_id, "Starting exploratory profile");

    let (input, table) = load_input(run_id, config, DatasetKind::Servidores.keyword())?;
    let profile = ExploratoryProfile::from_table(&table, config)?;
    if profile.total_lines == 0 {
        warn!(run_id = %run_id, "Worksheet has no data rows");
    }

    prepare_results_dir(&config.results_dir)?;
    let text = render_exploratory_report(&profile);
    let report = config.results_dir.join(EXPLORATORY_REPORT_FILE);
    write_text(&report, &text)?;

    info!(run_id = %run_id, report = %report.display(), "Exploratory profile complete");
    Ok(AuditRun {
        run_id,
        started_at,
        input,
        sheet: table.sheet().to_string(),
        spreadsheet: None,
        report,
        text,
        summary: None,
    })
}
