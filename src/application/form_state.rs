//! FormState - The checklist and requirements models of one session.

use crate::domain::checklist::{Checklist, ChecklistChoice};
use crate::domain::foundation::ChecklistEntryId;
use crate::domain::requirements::{RequirementField, RequirementsTable, DEFAULT_ROW_COUNT};

/// Both models, exclusively owned by one form session.
///
/// All mutations are synchronous and lookup misses are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    checklist: Checklist,
    requirements: RequirementsTable,
}

impl FormState {
    /// Seeded checklist plus `requirement_rows` blank requirement rows.
    pub fn new(requirement_rows: usize) -> Self {
        Self {
            checklist: Checklist::seeded(),
            requirements: RequirementsTable::with_blank_rows(requirement_rows),
        }
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn requirements(&self) -> &RequirementsTable {
        &self.requirements
    }

    pub fn toggle(&mut self, id: ChecklistEntryId, choice: ChecklistChoice) -> bool {
        self.checklist.toggle(id, choice)
    }

    pub fn update_field(
        &mut self,
        index: usize,
        field: RequirementField,
        value: impl Into<String>,
    ) -> bool {
        self.requirements.update_field(index, field, value)
    }

    pub fn append_requirement(&mut self) -> usize {
        self.requirements.append()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(DEFAULT_ROW_COUNT)
    }
}
