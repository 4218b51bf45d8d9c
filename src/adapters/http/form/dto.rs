//! HTTP DTOs for form endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::application::FormState;
use crate::domain::checklist::{AnswerFlags, ChecklistAnswer, ChecklistEntry};
use crate::domain::foundation::{DomainError, FormSessionId, RegionId};
use crate::domain::requirements::RequirementEntry;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to select a checklist category.
#[derive(Debug, Clone, Deserialize)]
pub struct SetAnswerRequest {
    /// `compliant`, `non_compliant` or `not_applicable`.
    pub answer: String,
}

/// Request to replace one requirement field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFieldRequest {
    pub value: String,
}

/// Query parameters for region exports.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub file_name: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One checklist row as the page renders it.
#[derive(Debug, Clone, Serialize)]
pub struct ChecklistEntryResponse {
    pub id: u32,
    pub criteria: String,
    pub answer: ChecklistAnswer,
    pub switches: AnswerFlags,
}

impl From<&ChecklistEntry> for ChecklistEntryResponse {
    fn from(entry: &ChecklistEntry) -> Self {
        Self {
            id: entry.id().value(),
            criteria: entry.criteria().to_string(),
            answer: entry.answer(),
            switches: entry.flags(),
        }
    }
}

/// Full form view returned by every read and mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub session_id: String,
    pub checklist: Vec<ChecklistEntryResponse>,
    pub requirements: Vec<RequirementEntry>,
    pub regions: Vec<RegionId>,
}

impl FormResponse {
    pub fn new(session_id: FormSessionId, state: &FormState, regions: Vec<RegionId>) -> Self {
        Self {
            session_id: session_id.to_string(),
            checklist: state.checklist().entries().iter().map(Into::into).collect(),
            requirements: state.requirements().rows().to_vec(),
            regions,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, String>>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message,
            details: (!error.details.is_empty()).then_some(error.details),
        }
    }
}
