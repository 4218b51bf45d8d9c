//! Bitmap rasterizer - `RegionRasterizer` backed by an in-process painter.

use async_trait::async_trait;
use tracing::debug;

use super::layout::{Metrics, TableLayout};
use super::paint::paint_table;
use crate::ports::{ExportError, RasterImage, RasterOptions, RegionRasterizer, RegionSnapshot};

/// Largest canvas, in pixels, the rasterizer will allocate (16384²).
const MAX_PIXELS: u64 = 268_435_456;

/// Paints table regions with an embedded 8×8 bitmap font.
///
/// Painting is CPU-bound, so it runs on tokio's blocking pool.
#[derive(Debug, Clone, Default)]
pub struct BitmapRasterizer;

impl BitmapRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Lays out and paints `region` synchronously.
    pub fn render(region: &RegionSnapshot, options: RasterOptions) -> Result<RasterImage, ExportError> {
        if region.columns.is_empty() {
            return Err(ExportError::rasterization_failed(format!(
                "region '{}' has no columns",
                region.region
            )));
        }

        let layout = TableLayout::measure(region, Metrics::new(options.scale));
        let area = u64::from(layout.width) * u64::from(layout.height);
        if area > MAX_PIXELS {
            return Err(ExportError::rasterization_failed(format!(
                "region '{}' is {}x{} px, limit is {} px in total",
                region.region, layout.width, layout.height, MAX_PIXELS
            )));
        }

        debug!(
            region = %region.region,
            width = layout.width,
            height = layout.height,
            rows = layout.row_heights.len(),
            "rasterizing region"
        );
        Ok(RasterImage::new(paint_table(&layout)))
    }
}

#[async_trait]
impl RegionRasterizer for BitmapRasterizer {
    async fn rasterize(
        &self,
        region: &RegionSnapshot,
        options: RasterOptions,
    ) -> Result<RasterImage, ExportError> {
        let region = region.clone();
        tokio::task::spawn_blocking(move || Self::render(&region, options))
            .await
            .map_err(|e| ExportError::rasterization_failed(format!("render task failed: {}", e)))?
    }
}
