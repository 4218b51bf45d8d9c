//! A single checklist question and its answer.

use serde::Serialize;

use super::{AnswerFlags, ChecklistAnswer, ChecklistChoice};
use crate::domain::foundation::ChecklistEntryId;

/// A compliance question with its current answer.
///
/// `criteria` is fixed at seed time; only the answer changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    id: ChecklistEntryId,
    criteria: String,
    answer: ChecklistAnswer,
}

impl ChecklistEntry {
    pub(super) fn new(id: ChecklistEntryId, criteria: impl Into<String>) -> Self {
        Self {
            id,
            criteria: criteria.into(),
            answer: ChecklistAnswer::Unset,
        }
    }

    pub fn id(&self) -> ChecklistEntryId {
        self.id
    }

    pub fn criteria(&self) -> &str {
        &self.criteria
    }

    pub fn answer(&self) -> ChecklistAnswer {
        self.answer
    }

    pub fn flags(&self) -> AnswerFlags {
        self.answer.flags()
    }

    /// Selects `choice`. Returns whether the answer changed.
    pub(super) fn select(&mut self, choice: ChecklistChoice) -> bool {
        let next = ChecklistAnswer::from(choice);
        if self.answer == next {
            return false;
        }
        self.answer = next;
        true
    }
}
