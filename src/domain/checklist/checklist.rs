//! Checklist aggregate.

use serde::Serialize;
use tracing::debug;

use super::{ChecklistChoice, ChecklistEntry};
use crate::domain::foundation::ChecklistEntryId;

/// Questions every session starts with, in display order. Ids are 1-based.
pub const SEED_CRITERIA: [&str; 7] = [
    "¿El tiempo de respuesta en los procesos es el esperado?",
    "¿Se especifican los criterios de seguridad en el sistema?",
    "¿El proceso está cuantificado en cantidad de usuarios y ancho de banda?",
    "¿Se especificaron posibles fallas en el sistema?",
    "¿Se definieron contingencias a posibles fallas?",
    "¿Hay estrategias de detección de errores en el sistema?",
    "¿Se especifican requisitos mínimos de hardware para la implementación del sistema?",
];

/// Ordered, fixed-size list of compliance questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checklist {
    entries: Vec<ChecklistEntry>,
}

impl Checklist {
    /// Builds the checklist from [`SEED_CRITERIA`], every answer unset.
    pub fn seeded() -> Self {
        let entries = SEED_CRITERIA
            .iter()
            .zip(1u32..)
            .map(|(criteria, id)| ChecklistEntry::new(ChecklistEntryId::new(id), *criteria))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[ChecklistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: ChecklistEntryId) -> Option<&ChecklistEntry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    /// Sets the answer of entry `id` to `choice`.
    ///
    /// Re-selecting the current answer changes nothing. An unknown id is a
    /// no-op. Returns whether any entry changed.
    pub fn toggle(&mut self, id: ChecklistEntryId, choice: ChecklistChoice) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => entry.select(choice),
            None => {
                debug!(checklist_id = %id, "toggle ignored: no such checklist entry");
                false
            }
        }
    }
}

impl Default for Checklist {
    fn default() -> Self {
        Self::seeded()
    }
}
