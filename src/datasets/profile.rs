//! Column layouts and output settings of each audited dataset.

use serde::{Deserialize, Serialize};

use crate::classification::FundRuleKind;
use crate::config::{AuditConfig, UndefinedFundPolicy};
use crate::models::Vocabulary;
use crate::report::OutputColumn;

/// The three audited datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    /// Active civil servants.
    Servidores,
    /// Retirees.
    Aposentados,
    /// Pensioners.
    Pensionistas,
}

/// Names of the source columns a [`crate::models::Record`] is built from.
///
/// Optional columns are those a dataset does not carry at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Person tax ID.
    pub person_id: &'static str,
    /// Birth date.
    pub birth_date: &'static str,
    /// Entry date into the entity.
    pub entry_date: Option<&'static str>,
    /// Declared fund code.
    pub declared_fund: &'static str,
    /// Supplementary pension flag.
    pub supplementary_pension: Option<&'static str>,
    /// Status code used by the scenario rule.
    pub status: Option<&'static str>,
    /// Contribution value.
    pub contribution: &'static str,
    /// Agency name.
    pub agency: &'static str,
}

/// Everything the pipeline needs to audit one dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetProfile {
    /// Which dataset this is.
    pub kind: DatasetKind,
    /// Keyword matched against file and sheet names.
    pub keyword: &'static str,
    /// Source columns of the record fields.
    pub columns: ColumnMap,
    /// Header renames applied after loading, `(from, to)`.
    pub aliases: &'static [(&'static str, &'static str)],
    /// Eligibility rule.
    pub rule: FundRuleKind,
    /// Ordered spreadsheet projection.
    pub output: Vec<OutputColumn>,
    /// Whether the spreadsheet holds only incompatible records.
    pub incompatible_only_output: bool,
    /// File name of the derived spreadsheet.
    pub spreadsheet_file: &'static str,
    /// File name of the text report.
    pub report_file: &'static str,
    /// Number of agencies listed in the report.
    pub top_agencies: usize,
}

const ACTIVE_STATUS: i64 = 1;

impl DatasetKind {
    /// All datasets.
    pub const ALL: [DatasetKind; 3] = [Self::Servidores, Self::Aposentados, Self::Pensionistas];

    /// Returns the file and sheet keyword of the dataset.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Servidores => "servidor",
            Self::Aposentados => "aposentado",
            Self::Pensionistas => "pensionista",
        }
    }

    /// Returns the configured undefined-fund policy of the dataset.
    pub fn undefined_policy(self, config: &AuditConfig) -> UndefinedFundPolicy {
        match self {
            Self::Servidores => config.undefined_fund.servidores,
            Self::Aposentados => config.undefined_fund.aposentados,
            Self::Pensionistas => config.undefined_fund.pensionistas,
        }
    }

    /// Builds the profile of the dataset.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_audit::datasets::DatasetKind;
    ///
    /// let profile = DatasetKind::Aposentados.profile();
    /// assert_eq!(profile.columns.person_id, "ID_APOSENTADO_CPF");
    /// assert_eq!(profile.report_file, "APOSENTADOS_resumo_analise.txt");
    /// ```
    pub fn profile(self) -> DatasetProfile {
        match self {
            Self::Servidores => servidores(),
            Self::Aposentados => aposentados(),
            Self::Pensionistas => pensionistas(),
        }
    }
}

impl std::fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

fn servidores() -> DatasetProfile {
    DatasetProfile {
        kind: DatasetKind::Servidores,
        keyword: DatasetKind::Servidores.keyword(),
        columns: ColumnMap {
            person_id: "ID_SERVIDOR_CPF",
            birth_date: "DT_NASC_SERVIDOR",
            entry_date: Some("DT_ING_ENTE"),
            declared_fund: "CO_TIPO_FUNDO",
            supplementary_pension: Some("IN_PREV_COMP"),
            status: Some("CO_SITUACAO_FUNCIONAL"),
            contribution: "VL_CONTRIBUICAO",
            agency: "NO_ORGAO",
        },
        aliases: &[],
        rule: FundRuleKind::EntryBirthPension {
            active_status: ACTIVE_STATUS,
        },
        output: vec![
            OutputColumn::Raw("ID_SERVIDOR_MATRICULA"),
            OutputColumn::Raw("ID_SERVIDOR_CPF"),
            OutputColumn::Decoded("CO_TIPO_FUNDO", Vocabulary::Fund),
            OutputColumn::Raw("NO_ORGAO"),
            OutputColumn::Decoded("CO_SITUACAO_FUNCIONAL", Vocabulary::FunctionalStatus),
            OutputColumn::Raw("VL_CONTRIBUICAO"),
            OutputColumn::Date("DT_ING_ENTE"),
            OutputColumn::Date("DT_NASC_SERVIDOR"),
            OutputColumn::Decoded("IN_PREV_COMP", Vocabulary::YesNo),
            OutputColumn::DuplicateId,
            OutputColumn::ComputedFund,
            OutputColumn::Compatibility,
            OutputColumn::Scenario,
        ],
        incompatible_only_output: false,
        spreadsheet_file: "SERVIDOR_resultado.xlsx",
        report_file: "SERVIDOR_resumo_analise.txt",
        top_agencies: 3,
    }
}

fn aposentados() -> DatasetProfile {
    DatasetProfile {
        kind: DatasetKind::Aposentados,
        keyword: DatasetKind::Aposentados.keyword(),
        columns: ColumnMap {
            person_id: "ID_APOSENTADO_CPF",
            birth_date: "DT_NASC_APOSENTADO",
            entry_date: Some("DT_ING_ENTE"),
            declared_fund: "CO_TIPO_FUNDO",
            supplementary_pension: Some("IN_PREV_COMP"),
            status: Some("CO_TIPO_APOSENTADORIA"),
            contribution: "VL_CONTRIBUICAO",
            agency: "NO_ORGAO",
        },
        aliases: &[("DATA DE INGRESSO NO ENTE", "DT_ING_ENTE")],
        rule: FundRuleKind::EntryBirthPension {
            active_status: ACTIVE_STATUS,
        },
        output: vec![
            OutputColumn::Raw("ID_APOSENTADO_MATRICULA"),
            OutputColumn::Raw("ID_APOSENTADO_CPF"),
            OutputColumn::Decoded("CO_TIPO_FUNDO", Vocabulary::Fund),
            OutputColumn::Raw("NO_ORGAO"),
            OutputColumn::Decoded("CO_TIPO_APOSENTADORIA", Vocabulary::RetirementType),
            OutputColumn::Raw("VL_APOSENTADORIA"),
            OutputColumn::Raw("VL_CONTRIBUICAO"),
            OutputColumn::Date("DT_ING_ENTE"),
            OutputColumn::Date("DT_NASC_APOSENTADO"),
            OutputColumn::Decoded("IN_PREV_COMP", Vocabulary::YesNo),
            OutputColumn::DuplicateId,
            OutputColumn::ComputedFund,
            OutputColumn::Compatibility,
            OutputColumn::Scenario,
        ],
        incompatible_only_output: false,
        spreadsheet_file: "APOSENTADOS_resultado.xlsx",
        report_file: "APOSENTADOS_resumo_analise.txt",
        top_agencies: 3,
    }
}

fn pensionistas() -> DatasetProfile {
    DatasetProfile {
        kind: DatasetKind::Pensionistas,
        keyword: DatasetKind::Pensionistas.keyword(),
        columns: ColumnMap {
            person_id: "ID_INSTITUIDOR_CPF",
            birth_date: "DT_NASC_INSTITUIDOR",
            entry_date: None,
            declared_fund: "CO_TIPO_FUNDO",
            supplementary_pension: None,
            status: None,
            contribution: "VL_CONTRIBUICAO",
            agency: "NO_ORGAO",
        },
        aliases: &[],
        rule: FundRuleKind::InstitutorBirth,
        output: vec![
            OutputColumn::Raw("ID_INSTITUIDOR_MATRICULA"),
            OutputColumn::Raw("ID_INSTITUIDOR_CPF"),
            OutputColumn::Raw("NO_ORGAO"),
            OutputColumn::Decoded("CO_TIPO_FUNDO", Vocabulary::Fund),
            OutputColumn::Date("DT_NASC_INSTITUIDOR"),
            OutputColumn::Raw("ID_PENSIONISTA_MATRICULA"),
            OutputColumn::Raw("ID_PENSIONISTA_CPF"),
            OutputColumn::Raw("VL_CONTRIBUICAO"),
            OutputColumn::DuplicateId,
            OutputColumn::ComputedFund,
            OutputColumn::Compatibility,
        ],
        incompatible_only_output: true,
        spreadsheet_file: "PENSIONISTAS_incompativeis.xlsx",
        report_file: "PENSIONISTAS_resumo_analise.txt",
        top_agencies: 5,
    }
}
