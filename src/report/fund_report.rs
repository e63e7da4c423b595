//! Text layouts of the fund audit reports.
//!
//! Each function returns the report entries in order. An entry may carry
//! embedded newlines; the file holds every entry followed by a newline.

use crate::aggregation::{FundSummary, top_n};
use crate::datasets::DatasetKind;
use crate::models::Scenario;

use super::format::{format_percent, money};

/// Renders the report of `kind`, listing at most `top_agencies` agencies.
///
/// # Example
///
/// ```
/// use fund_audit::aggregation::FundSummary;
/// use fund_audit::classification::ClassifiedTable;
/// use fund_audit::datasets::DatasetKind;
/// use fund_audit::report::render_fund_report;
///
/// let summary = FundSummary::from_table(&ClassifiedTable { records: vec![], excluded: 0 });
/// let lines = render_fund_report(DatasetKind::Pensionistas, &summary, 5);
/// assert_eq!(lines[0], "1. Total analisados (FUNPREV): 0");
/// assert_eq!(lines[1], "2. Compatíveis: 0 (0.00%)");
/// ```
pub fn render_fund_report(
    kind: DatasetKind,
    summary: &FundSummary,
    top_agencies: usize,
) -> Vec<String> {
    let mut lines = match kind {
        DatasetKind::Servidores => servant_report(summary, top_agencies),
        DatasetKind::Aposentados => retiree_report(summary, top_agencies),
        DatasetKind::Pensionistas => pensioner_report(summary, top_agencies),
    };
    if summary.excluded > 0 {
        lines.push(format!(
            "\nRegistros excluídos (fundo indefinido): {}",
            summary.excluded
        ));
    }
    lines
}

/// Joins report entries into the file body.
pub fn report_text(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn servant_report(s: &FundSummary, top_agencies: usize) -> Vec<String> {
    let mut lines = vec![
        format!("1. Total de linhas: {}\n", s.total),
        format!(
            "2. CPF_DUPLICADO \n2.1 - verdadeiro: {}\n",
            s.duplicate_records
        ),
        format!(
            "3. Fundos Compatíveis: {} ({})\n",
            s.compatible,
            format_percent(s.compatible, s.total)
        ),
        format!(
            "4. Fundos Incompatíveis: {} ({})",
            s.incompatible,
            format_percent(s.incompatible, s.total)
        ),
    ];
    push_funds(&mut lines, "4.1", s);

    lines.push("\n5. Incompatíveis por NO_ORGAO:".to_string());
    push_agencies(&mut lines, "5", s, top_agencies);

    lines.push("\n6 - Cenarios de incompatibilidade:".to_string());
    push_scenarios(&mut lines, "6", s);

    lines.push(format!(
        "\n7. VL_CONTRIBUICAO \n7.1 - nulo ou vazio: {}",
        s.missing_contribution
    ));
    lines.push(format!(
        "\n8. Valor total VL_CONTRIBUICAO \n8.1 - incompatível: {}",
        money(s.incompatible_contribution)
    ));
    lines
}

fn retiree_report(s: &FundSummary, top_agencies: usize) -> Vec<String> {
    let mut lines = vec![
        format!("1. Total de linhas: {}\n", s.total),
        format!(
            "2. Fundos Compatíveis: {} ({})\n",
            s.compatible,
            format_percent(s.compatible, s.total)
        ),
        format!(
            "3. Fundos Incompatíveis: {} ({})",
            s.incompatible,
            format_percent(s.incompatible, s.total)
        ),
    ];
    push_funds(&mut lines, "3.1", s);

    lines.push("\n4. Incompatíveis por NO_ORGAO:".to_string());
    push_agencies(&mut lines, "4", s, top_agencies);

    lines.push("\n5 - Cenários de incompatibilidade:".to_string());
    push_scenarios(&mut lines, "5", s);

    lines.push(format!(
        "\n6. Valor total VL_CONTRIBUICAO incompatível: {}",
        money(s.incompatible_contribution)
    ));
    lines.push(format!(
        "\n7. CPF_DUPLICADO verdadeiro: {}",
        s.duplicate_records
    ));
    lines
}

fn pensioner_report(s: &FundSummary, top_agencies: usize) -> Vec<String> {
    let mut lines = vec![
        format!("1. Total analisados (FUNPREV): {}", s.total),
        format!(
            "2. Compatíveis: {} ({})",
            s.compatible,
            format_percent(s.compatible, s.total)
        ),
        format!(
            "3. Incompatíveis: {} ({})",
            s.incompatible,
            format_percent(s.incompatible, s.total)
        ),
        format!("4. CPF duplicados: {}", s.duplicate_records),
        format!("\n5. Top {top_agencies} órgãos com incompatíveis:"),
    ];
    push_agencies(&mut lines, "5", s, top_agencies);
    lines
}

fn push_funds(lines: &mut Vec<String>, prefix: &str, s: &FundSummary) {
    for (i, (fund, count)) in s.incompatible_by_fund.iter().enumerate() {
        lines.push(format!(
            "{prefix}.{} - Incompatíveis no fundo {fund}: {count}",
            i + 1
        ));
    }
}

fn push_agencies(lines: &mut Vec<String>, prefix: &str, s: &FundSummary, n: usize) {
    for (i, (agency, count)) in top_n(&s.incompatible_by_agency, n).iter().enumerate() {
        lines.push(format!("{prefix}.{} - {agency}: {count}", i + 1));
    }
}

fn push_scenarios(lines: &mut Vec<String>, prefix: &str, s: &FundSummary) {
    for scenario in Scenario::ALL {
        lines.push(format!(
            "{prefix}.{} - {}: {}",
            scenario.number(),
            scenario.label(),
            s.scenario_count(scenario)
        ));
    }
}
