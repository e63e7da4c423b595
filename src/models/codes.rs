//! Categorical code tables used by the payroll and pension datasets.
//!
//! Each table maps the small integer codes found in the source spreadsheets
//! to the Portuguese labels printed in the reports.

use serde::{Deserialize, Serialize};

/// The retirement fund a record is declared in or computed to belong to.
///
/// Only [`FundCode::Funprev`] (fund A) and [`FundCode::Funfin`] (fund B) are
/// ever produced by the eligibility rules; the other two codes appear only as
/// declared values.
///
/// # Example
///
/// ```
/// use fund_audit::models::FundCode;
///
/// assert_eq!(FundCode::from_code(2), Some(FundCode::Funfin));
/// assert_eq!(FundCode::Funfin.label(), "FUNFIN");
/// assert_eq!(FundCode::from_label("funprev"), Some(FundCode::Funprev));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundCode {
    /// Code 1: capitalized fund for entrants under the reformed regime.
    Funprev,
    /// Code 2: financial-distribution fund for the grandfathered population.
    Funfin,
    /// Code 3: benefits paid directly by the treasury.
    Treasury,
    /// Code 9: fund not stated.
    NotStated,
}

impl FundCode {
    /// Decodes a numeric fund code.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Funprev),
            2 => Some(Self::Funfin),
            3 => Some(Self::Treasury),
            9 => Some(Self::NotStated),
            _ => None,
        }
    }

    /// Decodes a fund label, ignoring case and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        [Self::Funprev, Self::Funfin, Self::Treasury, Self::NotStated]
            .into_iter()
            .find(|fund| fund.label().eq_ignore_ascii_case(label))
    }

    /// Returns the report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Funprev => "FUNPREV",
            Self::Funfin => "FUNFIN",
            Self::Treasury => "Mantidos pelo Tesouro",
            Self::NotStated => "Não consta",
        }
    }
}

impl std::fmt::Display for FundCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the person adhered to the supplementary pension scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplementaryPension {
    /// Code 1: adhered.
    Yes,
    /// Code 2: did not adhere.
    No,
}

impl SupplementaryPension {
    /// Decodes the `IN_PREV_COMP` flag.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Yes),
            2 => Some(Self::No),
            _ => None,
        }
    }

    /// Returns the report label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Sim",
            Self::No => "Não",
        }
    }
}

/// A fixed code-to-label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    /// `CO_TIPO_FUNDO`.
    Fund,
    /// `IN_PREV_COMP`, `IN_ABONO_PERMANENCIA`.
    YesNo,
    /// `CO_SITUACAO_FUNCIONAL`.
    FunctionalStatus,
    /// `CO_TIPO_APOSENTADORIA`.
    RetirementType,
    /// `CO_TIPO_CARGO`.
    PositionType,
    /// `CO_SEXO_SERVIDOR`.
    Sex,
    /// `CO_EST_CIVIL_SERVIDOR`.
    MaritalStatus,
}

impl Vocabulary {
    /// Looks up the label for `code`, or `None` for codes outside the table.
    ///
    /// # Example
    ///
    /// ```
    /// use fund_audit::models::Vocabulary;
    ///
    /// assert_eq!(Vocabulary::FunctionalStatus.label(1), Some("Em Exercício"));
    /// assert_eq!(Vocabulary::Sex.label(3), None);
    /// ```
    pub fn label(self, code: i64) -> Option<&'static str> {
        match self {
            Self::Fund => FundCode::from_code(code).map(FundCode::label),
            Self::YesNo => SupplementaryPension::from_code(code).map(SupplementaryPension::label),
            Self::FunctionalStatus => functional_status_label(code),
            Self::RetirementType => retirement_type_label(code),
            Self::PositionType => position_type_label(code),
            Self::Sex => match code {
                1 => Some("feminino"),
                2 => Some("masculino"),
                _ => None,
            },
            Self::MaritalStatus => marital_status_label(code),
        }
    }
}

fn functional_status_label(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Em Exercício",
        2 => "Licenciado(a) com Remuneração",
        3 => "Licenciado(a) sem Remuneração",
        4 => "Cedido(a) com Ônus",
        5 => "Cedido(a) sem Ônus",
        6 => "Requisitado(a) com Ônus",
        7 => "Requisitado(a) sem Ônus",
        8 => "Em Disponibilidade",
        9 => "Afastado Mandato Eletivo",
        10 => "Recluso ou Detido",
        11 => "Outros",
        _ => return None,
    })
}

fn retirement_type_label(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Aposentadoria por Idade",
        2 => "Aposentadoria por Tempo de Contribuição",
        3 => "Aposentadoria Compulsória",
        4 => "Aposentadoria por Invalidez",
        5 => "Aposentadoria como Professor",
        6 => "Aposentadoria Especial - atividade de risco (Art. 40, § 4º, inc. II, CF)",
        7 => concat!(
            "Aposentadoria Especial - atividade prejudiciais à saúde ",
            "ou integridade física (Art. 40, § 4º, inc. III, CF)"
        ),
        9 => "Militares Inativos - Reserva Remunerada",
        10 => "Militares Inativos - Reforma",
        _ => return None,
    })
}

fn position_type_label(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "Magistrados, Membros do Min. Público ou de Tribunal de Contas",
        2 => "Professores da Educ. Infantil e do Ensino Fund. e Médio",
        3 => "Professores do Ensino Superior",
        4 => "Policiais Civis (Federais, Distritais ou Estaduais)",
        5 => "Agente Penitenciário",
        6 => "Guarda Municipal",
        7 => "Demais Servidores",
        _ => return None,
    })
}

fn marital_status_label(code: i64) -> Option<&'static str> {
    Some(match code {
        1 => "solteiro(a)",
        2 => "casado(a)",
        3 => "viúvo(a)",
        4 => "separado(a) judicialmente",
        5 => "divorciado(a)",
        6 => "união estável",
        9 => "outros",
        _ => return None,
    })
}
