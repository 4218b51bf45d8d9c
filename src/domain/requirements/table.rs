//! Requirements table aggregate.

use serde::Serialize;
use tracing::debug;

use super::{RequirementEntry, RequirementField};

/// Number of blank rows a new session starts with.
pub const DEFAULT_ROW_COUNT: usize = 5;

/// Insertion-ordered list of requirement rows.
///
/// Rows are only ever appended; there is no removal or reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequirementsTable {
    rows: Vec<RequirementEntry>,
}

impl RequirementsTable {
    /// Creates a table with `rows` blank entries.
    pub fn with_blank_rows(rows: usize) -> Self {
        Self {
            rows: vec![RequirementEntry::blank(); rows],
        }
    }

    pub fn rows(&self) -> &[RequirementEntry] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RequirementEntry> {
        self.rows.get(index)
    }

    /// Replaces one field of the row at `index`.
    ///
    /// An out-of-range index is a no-op. Returns whether a row was updated.
    pub fn update_field(
        &mut self,
        index: usize,
        field: RequirementField,
        value: impl Into<String>,
    ) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.set(field, value);
                true
            }
            None => {
                debug!(index, field = %field, rows = self.rows.len(), "update ignored: row out of range");
                false
            }
        }
    }

    /// Appends a blank row and returns its index.
    pub fn append(&mut self) -> usize {
        self.rows.push(RequirementEntry::blank());
        self.rows.len() - 1
    }
}

impl Default for RequirementsTable {
    fn default() -> Self {
        Self::with_blank_rows(DEFAULT_ROW_COUNT)
    }
}
