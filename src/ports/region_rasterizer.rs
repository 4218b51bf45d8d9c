//! Region Rasterizer Port - Pixel capture of a painted region.

use std::io::Cursor;

use async_trait::async_trait;
use image::{ImageFormat, RgbImage};

use super::{ExportError, RegionSnapshot};

/// Port for rasterizing a painted region.
///
/// # Contract
///
/// Implementations must:
/// - Capture the full region, including columns that would overflow a
///   viewport horizontally
/// - Produce an image at least one pixel in each dimension
/// - Leave the snapshot untouched
#[async_trait]
pub trait RegionRasterizer: Send + Sync {
    async fn rasterize(
        &self,
        region: &RegionSnapshot,
        options: RasterOptions,
    ) -> Result<RasterImage, ExportError>;
}

/// Tuning knobs for rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    /// Integer multiplier applied to every dimension.
    pub scale: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1 }
    }
}

/// An 8-bit RGB pixel image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbImage,
}

impl RasterImage {
    pub fn new(pixels: RgbImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Raw row-major RGB samples.
    pub fn rgb_bytes(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Encodes the image as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Cursor::new(Vec::new());
        self.pixels
            .write_to(&mut buffer, ImageFormat::Png)
            .map_err(|e| ExportError::encoding_failed(e.to_string()))?;
        Ok(buffer.into_inner())
    }
}
