//! Derived classification fields attached to each record.

use serde::{Deserialize, Serialize};

use super::{FundCode, Record};

/// Whether the declared fund matches the computed fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compatibility {
    /// Declared and computed funds agree.
    Compatible,
    /// Declared and computed funds differ, or either is missing.
    Incompatible,
}

impl Compatibility {
    /// Returns the label written to `COMPATIBILIDADE_FUNDO`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compatible => "compativel",
            Self::Incompatible => "incompativel",
        }
    }

    /// Returns true for [`Compatibility::Incompatible`].
    pub fn is_incompatible(self) -> bool {
        self == Self::Incompatible
    }
}

/// Refinement bucket of an incompatible record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// The person's ID appears only once.
    Scenario1,
    /// The ID is duplicated and the record is in the active status.
    Scenario2,
    /// The ID is duplicated and the record is in any other status.
    Scenario3,
}

impl Scenario {
    /// All scenarios in report order.
    pub const ALL: [Scenario; 3] = [Self::Scenario1, Self::Scenario2, Self::Scenario3];

    /// Returns the scenario number (1 to 3).
    pub fn number(self) -> u8 {
        match self {
            Self::Scenario1 => 1,
            Self::Scenario2 => 2,
            Self::Scenario3 => 3,
        }
    }

    /// Returns the label written to `CENARIO_FUNDO`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scenario1 => "Cenario 1",
            Self::Scenario2 => "Cenario 2",
            Self::Scenario3 => "Cenario 3",
        }
    }
}

/// The classifier's output for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The fund the eligibility rule implies, or `None` when undefined.
    pub computed_fund: Option<FundCode>,
    /// Declared versus computed fund.
    pub compatibility: Compatibility,
    /// Whether the person ID occurs more than once in the table.
    pub duplicate_id: bool,
    /// Refinement bucket; always `None` for compatible records.
    pub scenario: Option<Scenario>,
}

/// A record together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    /// The source record.
    pub record: Record,
    /// Its derived fields.
    pub classification: Classification,
}

impl ClassifiedRecord {
    /// Returns true if the record is incompatible.
    pub fn is_incompatible(&self) -> bool {
        self.classification.compatibility.is_incompatible()
    }
}
