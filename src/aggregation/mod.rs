//! Aggregation of classified records into report figures.
//!
//! Frequency counts, sums and descriptive statistics, plus the two figure
//! sets the reports print: [`FundSummary`] and [`ExploratoryProfile`].

mod counts;
mod exploratory;
mod fund_summary;
mod stats;

pub use counts::{top_n, value_counts};
pub use exploratory::{ExploratoryProfile, MINIMUM_ENTRY_AGE, columns as exploratory_columns};
pub use fund_summary::FundSummary;
pub use stats::{Describe, sum_present};
