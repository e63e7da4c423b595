//! Text layout of the exploratory servant report.

use crate::aggregation::{Describe, ExploratoryProfile};

const SEPARATOR_WIDTH: usize = 60;

/// The value of one report block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockValue {
    /// A single count.
    Count(usize),
    /// A frequency table with the given key header.
    Counts(&'static str, Vec<(String, usize)>),
    /// Descriptive statistics.
    Stats(Describe),
}

/// Lists the report blocks in print order.
pub fn exploratory_blocks(p: &ExploratoryProfile) -> Vec<(&'static str, BlockValue)> {
    use BlockValue::*;
    vec![
        ("Total de linhas", Count(p.total_lines)),
        ("Servidores por fundo", Counts("Fundo", p.by_fund.clone())),
        ("Servidores por órgão", Counts("Órgão", p.by_agency.clone())),
        (
            "Servidores por tipo de cargo",
            Counts("Cargo", p.by_position_type.clone()),
        ),
        ("CPFs duplicados", Count(p.repeated_ids)),
        ("Servidores por sexo", Counts("Sexo", p.by_sex.clone())),
        (
            "Servidores por estado civil",
            Counts("Estado Civil", p.by_marital_status.clone()),
        ),
        (
            "Servidores por situação funcional",
            Counts("Situação", p.by_status.clone()),
        ),
        ("Faixas de idade", Stats(p.age)),
        (
            "Faixas de idade de ingresso no serviço público",
            Stats(p.public_service_entry_age),
        ),
        (
            "Ingressos no serviço público com menos de 18 anos",
            Count(p.public_service_entries_under_18),
        ),
        (
            "Faixas de idade de ingresso no ente",
            Stats(p.entity_entry_age),
        ),
        (
            "Ingressos no ente com menos de 18 anos",
            Count(p.entity_entries_under_18),
        ),
        ("Base de cálculo abaixo do mínimo", Count(p.base_below_minimum)),
        ("Base de cálculo acima do teto", Count(p.base_above_ceiling)),
        (
            "Remuneração abaixo do mínimo",
            Count(p.remuneration_below_minimum),
        ),
        ("Remuneração acima do teto", Count(p.remuneration_above_ceiling)),
        ("Abono de permanência (Sim)", Count(p.permanence_bonus_yes)),
        ("Abono de permanência (Não)", Count(p.permanence_bonus_no)),
        (
            "Previdência complementar (Sim)",
            Count(p.supplementary_pension_yes),
        ),
        (
            "Previdência complementar (Não)",
            Count(p.supplementary_pension_no),
        ),
    ]
}

/// Renders the whole report body.
pub fn render_exploratory_report(profile: &ExploratoryProfile) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    exploratory_blocks(profile)
        .into_iter()
        .map(|(key, value)| format!("{key}:\n{}\n{separator}\n", render_value(&value)))
        .collect()
}

fn render_value(value: &BlockValue) -> String {
    match value {
        BlockValue::Count(n) => n.to_string(),
        BlockValue::Counts(header, rows) => render_counts(header, rows),
        BlockValue::Stats(describe) => describe.to_string(),
    }
}

/// Renders a frequency table with a row index, the key column and a
/// `Contagem` column, all right-aligned.
pub fn render_counts(header: &str, rows: &[(String, usize)]) -> String {
    const COUNT_HEADER: &str = "Contagem";
    if rows.is_empty() {
        return format!("Empty DataFrame\nColumns: [{header}, {COUNT_HEADER}]\nIndex: []");
    }

    let index_width = (rows.len() - 1).to_string().len();
    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .chain(std::iter::once(COUNT_HEADER.len()))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format!(
        "{:>index_width$}  {header:>key_width$}  {COUNT_HEADER:>count_width$}",
        ""
    ));
    for (i, (key, count)) in rows.iter().enumerate() {
        lines.push(format!(
            "{i:<index_width$}  {key:>key_width$}  {count:>count_width$}"
        ));
    }
    lines.join("\n")
}
