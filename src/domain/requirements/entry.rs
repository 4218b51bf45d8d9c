//! A single row of the traceability table.

use serde::{Deserialize, Serialize};

use super::RequirementField;

/// Free-form traceability record. Every field starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementEntry {
    pub identifier: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub last_updated: String,
    pub acceptance_criteria: String,
    pub complexity: String,
    pub deliverables: String,
    pub test_scenarios: String,
    pub stakeholder: String,
}

impl RequirementEntry {
    /// Creates a row with every field empty.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, field: RequirementField) -> &str {
        match field {
            RequirementField::Identifier => &self.identifier,
            RequirementField::Description => &self.description,
            RequirementField::Priority => &self.priority,
            RequirementField::Status => &self.status,
            RequirementField::LastUpdated => &self.last_updated,
            RequirementField::AcceptanceCriteria => &self.acceptance_criteria,
            RequirementField::Complexity => &self.complexity,
            RequirementField::Deliverables => &self.deliverables,
            RequirementField::TestScenarios => &self.test_scenarios,
            RequirementField::Stakeholder => &self.stakeholder,
        }
    }

    pub fn set(&mut self, field: RequirementField, value: impl Into<String>) {
        let slot = match field {
            RequirementField::Identifier => &mut self.identifier,
            RequirementField::Description => &mut self.description,
            RequirementField::Priority => &mut self.priority,
            RequirementField::Status => &mut self.status,
            RequirementField::LastUpdated => &mut self.last_updated,
            RequirementField::AcceptanceCriteria => &mut self.acceptance_criteria,
            RequirementField::Complexity => &mut self.complexity,
            RequirementField::Deliverables => &mut self.deliverables,
            RequirementField::TestScenarios => &mut self.test_scenarios,
            RequirementField::Stakeholder => &mut self.stakeholder,
        };
        *slot = value.into();
    }

    /// True when every field is empty.
    pub fn is_blank(&self) -> bool {
        RequirementField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}
