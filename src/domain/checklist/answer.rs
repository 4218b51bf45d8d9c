//! Tri-state answer for a checklist question.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Answer recorded against a checklist question.
///
/// `Unset` is only ever the initial state; once a choice is made the entry
/// always holds exactly one of the three categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistAnswer {
    #[default]
    Unset,
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl ChecklistAnswer {
    /// Expands the answer into the three switch states shown to the user.
    pub fn flags(&self) -> AnswerFlags {
        AnswerFlags {
            compliant: matches!(self, ChecklistAnswer::Compliant),
            non_compliant: matches!(self, ChecklistAnswer::NonCompliant),
            not_applicable: matches!(self, ChecklistAnswer::NotApplicable),
        }
    }
}

impl fmt::Display for ChecklistAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChecklistAnswer::Unset => "Unset",
            ChecklistAnswer::Compliant => "Compliant",
            ChecklistAnswer::NonCompliant => "Non Compliant",
            ChecklistAnswer::NotApplicable => "Not Applicable",
        };
        write!(f, "{}", s)
    }
}

/// One of the three categories a user can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistChoice {
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl ChecklistChoice {
    pub const ALL: [ChecklistChoice; 3] = [
        ChecklistChoice::Compliant,
        ChecklistChoice::NonCompliant,
        ChecklistChoice::NotApplicable,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistChoice::Compliant => "compliant",
            ChecklistChoice::NonCompliant => "non_compliant",
            ChecklistChoice::NotApplicable => "not_applicable",
        }
    }
}

impl From<ChecklistChoice> for ChecklistAnswer {
    fn from(choice: ChecklistChoice) -> Self {
        match choice {
            ChecklistChoice::Compliant => ChecklistAnswer::Compliant,
            ChecklistChoice::NonCompliant => ChecklistAnswer::NonCompliant,
            ChecklistChoice::NotApplicable => ChecklistAnswer::NotApplicable,
        }
    }
}

impl FromStr for ChecklistChoice {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compliant" => Ok(ChecklistChoice::Compliant),
            "non_compliant" | "noncompliant" => Ok(ChecklistChoice::NonCompliant),
            "not_applicable" | "notapplicable" => Ok(ChecklistChoice::NotApplicable),
            _ => Err(ValidationError::unknown_value("answer", s)),
        }
    }
}

/// The three switch states derived from a [`ChecklistAnswer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnswerFlags {
    pub compliant: bool,
    pub non_compliant: bool,
    pub not_applicable: bool,
}

impl AnswerFlags {
    /// Number of switches that are on. Never exceeds one.
    pub fn active_count(&self) -> usize {
        [self.compliant, self.non_compliant, self.not_applicable]
            .iter()
            .filter(|on| **on)
            .count()
    }

    /// Whether the switch for `choice` is on.
    pub fn is_on(&self, choice: ChecklistChoice) -> bool {
        match choice {
            ChecklistChoice::Compliant => self.compliant,
            ChecklistChoice::NonCompliant => self.non_compliant,
            ChecklistChoice::NotApplicable => self.not_applicable,
        }
    }
}
