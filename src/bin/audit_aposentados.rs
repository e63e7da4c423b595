//! Fund audit of the aposentados workbook.

use std::process::ExitCode;

use fund_audit::cli::{Report, run_cli};
use fund_audit::datasets::DatasetKind;

fn main() -> ExitCode {
    run_cli(Report::FundAudit(DatasetKind::Aposentados))
}
