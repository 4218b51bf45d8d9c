//! Editable columns of a requirement row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the ten free-text columns of the traceability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequirementField {
    #[serde(alias = "id")]
    Identifier,
    Description,
    Priority,
    Status,
    LastUpdated,
    AcceptanceCriteria,
    Complexity,
    Deliverables,
    TestScenarios,
    Stakeholder,
}

impl RequirementField {
    /// All fields in table column order.
    pub const ALL: [RequirementField; 10] = [
        RequirementField::Identifier,
        RequirementField::Description,
        RequirementField::Priority,
        RequirementField::Status,
        RequirementField::LastUpdated,
        RequirementField::AcceptanceCriteria,
        RequirementField::Complexity,
        RequirementField::Deliverables,
        RequirementField::TestScenarios,
        RequirementField::Stakeholder,
    ];

    /// Wire name used by the presentation boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementField::Identifier => "identifier",
            RequirementField::Description => "description",
            RequirementField::Priority => "priority",
            RequirementField::Status => "status",
            RequirementField::LastUpdated => "lastUpdated",
            RequirementField::AcceptanceCriteria => "acceptanceCriteria",
            RequirementField::Complexity => "complexity",
            RequirementField::Deliverables => "deliverables",
            RequirementField::TestScenarios => "testScenarios",
            RequirementField::Stakeholder => "stakeholder",
        }
    }

    /// Whether the column holds wrapping, multi-line text.
    pub fn is_multiline(&self) -> bool {
        matches!(
            self,
            RequirementField::Description
                | RequirementField::AcceptanceCriteria
                | RequirementField::Deliverables
                | RequirementField::TestScenarios
        )
    }
}

impl fmt::Display for RequirementField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RequirementField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "id" {
            return Ok(RequirementField::Identifier);
        }
        RequirementField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::unknown_value("field", s))
    }
}
