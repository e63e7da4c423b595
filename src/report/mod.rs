//! Report output: the derived spreadsheet and the Portuguese text reports.

mod exploratory_report;
mod format;
mod fund_report;
mod spreadsheet;

pub use exploratory_report::{
    BlockValue, exploratory_blocks, render_counts, render_exploratory_report,
};
pub use format::{format_percent, money, percent};
pub use fund_report::{render_fund_report, report_text};
pub use spreadsheet::{
    COMPATIBILITY_HEADER, COMPUTED_FUND_HEADER, DUPLICATE_ID_HEADER, OutputColumn,
    SCENARIO_HEADER, write_spreadsheet,
};
