//! Shared entry point of the report binaries.

use std::process::ExitCode;

use tracing::error;

use crate::config::{ConfigLoader, DEFAULT_CONFIG_FILE};
use crate::datasets::DatasetKind;
use crate::error::AuditResult;
use crate::pipeline::{AuditRun, run_exploratory, run_fund_audit};

/// Log filter of the report binaries.
pub const DEFAULT_LOG_FILTER: &str = "fund_audit=info";

/// Which report a binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Fund audit of one dataset.
    FundAudit(DatasetKind),
    /// Exploratory profile of the civil servants.
    Exploratory,
}

/// Installs the log subscriber, writing to stderr so stdout carries only
/// the report.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(DEFAULT_LOG_FILTER)
        .with_writer(std::io::stderr)
        .init();
}

fn run(report: Report) -> AuditResult<AuditRun> {
    let config = ConfigLoader::load_or_default(DEFAULT_CONFIG_FILE)?.into_config();
    match report {
        Report::FundAudit(kind) => run_fund_audit(kind, &config),
        Report::Exploratory => run_exploratory(&config),
    }
}

fn print_run(run: &AuditRun) {
    println!("Arquivo selecionado: {}", run.input.display());
    println!("Aba selecionada: {}", run.sheet);
    print!("{}", run.text);
    println!("\nAnálise concluída. Arquivos salvos em:");
    if let Some(spreadsheet) = &run.spreadsheet {
        println!("- {}", spreadsheet.display());
    }
    println!("- {}", run.report.display());
}

/// Runs `report` with the configuration from the working directory and
/// echoes the result to stdout.
pub fn run_cli(report: Report) -> ExitCode {
    init_logging();
    match run(report) {
        Ok(run) => {
            print_run(&run);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Report failed");
            eprintln!("Erro: {e}");
            ExitCode::FAILURE
        }
    }
}
