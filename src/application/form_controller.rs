//! FormController - One browser session's form.
//!
//! Owns the two models behind a lock and drives the [`ExportAdapter`]
//! against named regions. Mutations hold the write lock only for the
//! duration of the model call. Exports hold the read lock only while the
//! region is painted, then release it before rasterizing, so users can keep
//! editing while an export runs.

use tokio::sync::RwLock;
use tracing::debug;

use super::{ExportAdapter, FormState};
use crate::domain::checklist::ChecklistChoice;
use crate::domain::foundation::{ChecklistEntryId, FormSessionId, RegionId};
use crate::domain::requirements::RequirementField;
use crate::ports::{ExportError, ExportKind, ExportedFile, RegionSnapshot};

/// Command to export a region.
#[derive(Debug, Clone)]
pub struct ExportRegionCommand {
    pub region: RegionId,
    pub kind: ExportKind,
    /// Download name; the region's default when absent.
    pub file_name: Option<String>,
}

/// Session-scoped form controller.
pub struct FormController {
    id: FormSessionId,
    state: RwLock<FormState>,
    exporter: ExportAdapter,
}

impl FormController {
    pub fn new(state: FormState, exporter: ExportAdapter) -> Self {
        Self {
            id: FormSessionId::new(),
            state: RwLock::new(state),
            exporter,
        }
    }

    pub fn id(&self) -> FormSessionId {
        self.id
    }

    pub fn exporter(&self) -> &ExportAdapter {
        &self.exporter
    }

    /// Copy of the current models for rendering.
    pub async fn view(&self) -> FormState {
        self.state.read().await.clone()
    }

    /// Selects `choice` for checklist entry `id`; unknown ids are ignored.
    pub async fn toggle(&self, id: ChecklistEntryId, choice: ChecklistChoice) -> FormState {
        let mut state = self.state.write().await;
        let changed = state.toggle(id, choice);
        debug!(session = %self.id, checklist_id = %id, answer = choice.as_str(), changed, "toggle");
        state.clone()
    }

    /// Replaces one requirement field; out-of-range rows are ignored.
    pub async fn update_field(
        &self,
        index: usize,
        field: RequirementField,
        value: String,
    ) -> FormState {
        let mut state = self.state.write().await;
        let changed = state.update_field(index, field, value);
        debug!(session = %self.id, index, field = %field, changed, "update requirement field");
        state.clone()
    }

    /// Appends a blank requirement row.
    pub async fn append_requirement(&self) -> FormState {
        let mut state = self.state.write().await;
        let index = state.append_requirement();
        debug!(session = %self.id, index, "appended requirement row");
        state.clone()
    }

    /// PNG of `region`. `Ok(None)` when the region does not exist.
    pub async fn capture_image(
        &self,
        region: &RegionId,
        file_name: &str,
    ) -> Result<Option<ExportedFile>, ExportError> {
        let Some(snapshot) = self.snapshot(region).await else {
            return Ok(None);
        };
        self.exporter
            .capture_image(&snapshot, file_name)
            .await
            .map(Some)
    }

    /// Single-page PDF of `region`. `Ok(None)` when the region does not exist.
    pub async fn export_document(
        &self,
        region: &RegionId,
        file_name: &str,
    ) -> Result<Option<ExportedFile>, ExportError> {
        let Some(snapshot) = self.snapshot(region).await else {
            return Ok(None);
        };
        self.exporter
            .export_document(&snapshot, file_name)
            .await
            .map(Some)
    }

    /// Runs an [`ExportRegionCommand`], filling in the default file name.
    pub async fn export(
        &self,
        cmd: ExportRegionCommand,
    ) -> Result<Option<ExportedFile>, ExportError> {
        let file_name = cmd
            .file_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.exporter.default_file_name(&cmd.region, cmd.kind));

        match cmd.kind {
            ExportKind::Image => self.capture_image(&cmd.region, &file_name).await,
            ExportKind::Document => self.export_document(&cmd.region, &file_name).await,
        }
    }

    async fn snapshot(&self, region: &RegionId) -> Option<RegionSnapshot> {
        let state = self.state.read().await;
        self.exporter.snapshot(region, &state)
    }
}
