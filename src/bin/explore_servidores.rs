//! Exploratory profile of the servidores workbook.

use std::process::ExitCode;

use fund_audit::cli::{Report, run_cli};

fn main() -> ExitCode {
    run_cli(Report::Exploratory)
}
