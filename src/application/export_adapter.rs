//! ExportAdapter - Captures a painted region as a PNG or a one-page PDF.
//!
//! Never mutates form state: it works from a [`RegionSnapshot`] taken by the
//! caller, so later edits cannot leak into an export already in flight.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::FormState;
use crate::domain::foundation::RegionId;
use crate::ports::{
    DocumentComposer, ExportError, ExportKind, ExportedFile, RasterOptions, RegionLayout,
    RegionRasterizer, RegionSnapshot,
};

/// Region capture service.
#[derive(Clone)]
pub struct ExportAdapter {
    layout: Arc<dyn RegionLayout>,
    rasterizer: Arc<dyn RegionRasterizer>,
    composer: Arc<dyn DocumentComposer>,
    options: RasterOptions,
}

impl ExportAdapter {
    pub fn new(
        layout: Arc<dyn RegionLayout>,
        rasterizer: Arc<dyn RegionRasterizer>,
        composer: Arc<dyn DocumentComposer>,
    ) -> Self {
        Self {
            layout,
            rasterizer,
            composer,
            options: RasterOptions::default(),
        }
    }

    /// Set the raster scale factor (clamped to at least 1).
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.options.scale = scale.max(1);
        self
    }

    pub fn layout(&self) -> &dyn RegionLayout {
        self.layout.as_ref()
    }

    /// Paints `region` from `state`. `None` when the region does not exist.
    pub fn snapshot(&self, region: &RegionId, state: &FormState) -> Option<RegionSnapshot> {
        let snapshot = self
            .layout
            .locate(region, state.checklist(), state.requirements());
        if snapshot.is_none() {
            debug!(region = %region, "export skipped: region not found");
        }
        snapshot
    }

    /// Download name used when the caller does not supply one.
    pub fn default_file_name(&self, region: &RegionId, kind: ExportKind) -> String {
        format!("{}.{}", self.layout.file_stem(region), kind.extension())
    }

    /// Rasterizes the snapshot and encodes it as PNG.
    pub async fn capture_image(
        &self,
        snapshot: &RegionSnapshot,
        file_name: &str,
    ) -> Result<ExportedFile, ExportError> {
        let started = Instant::now();
        let image = self.rasterizer.rasterize(snapshot, self.options).await?;
        let png = image.to_png()?;

        info!(
            region = %snapshot.region,
            file_name,
            width = image.width(),
            height = image.height(),
            bytes = png.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "captured region image"
        );
        Ok(ExportedFile::new(png, ExportKind::Image, file_name))
    }

    /// Rasterizes the snapshot and embeds it as the single page of a PDF.
    pub async fn export_document(
        &self,
        snapshot: &RegionSnapshot,
        file_name: &str,
    ) -> Result<ExportedFile, ExportError> {
        let started = Instant::now();
        let image = self.rasterizer.rasterize(snapshot, self.options).await?;
        let pdf = self.composer.compose(&image).await?;

        info!(
            region = %snapshot.region,
            file_name,
            width = image.width(),
            height = image.height(),
            bytes = pdf.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "exported region document"
        );
        Ok(ExportedFile::new(pdf, ExportKind::Document, file_name))
    }

    /// Dispatches on `kind`.
    pub async fn export(
        &self,
        snapshot: &RegionSnapshot,
        kind: ExportKind,
        file_name: &str,
    ) -> Result<ExportedFile, ExportError> {
        match kind {
            ExportKind::Image => self.capture_image(snapshot, file_name).await,
            ExportKind::Document => self.export_document(snapshot, file_name).await,
        }
    }
}
