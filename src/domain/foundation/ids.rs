//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Stable sequence number of a checklist question.
///
/// Assigned once when the checklist is seeded and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistEntryId(u32);

impl ChecklistEntryId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ChecklistEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of a rendered region of the form that can be captured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    /// The checklist table region.
    pub const CHECKLIST: &'static str = "checklist-table";
    /// The requirements traceability table region.
    pub const REQUIREMENTS: &'static str = "requirements-table";

    /// Creates a region id, rejecting blank names.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("region"));
        }
        Ok(Self(name))
    }

    pub fn checklist() -> Self {
        Self(Self::CHECKLIST.to_string())
    }

    pub fn requirements() -> Self {
        Self(Self::REQUIREMENTS.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RegionId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of one in-memory form session, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSessionId(Uuid);

impl FormSessionId {
    /// Creates a new random FormSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FormSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
