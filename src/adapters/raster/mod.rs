//! Raster adapter - Software rendering of painted regions.
//!
//! Rendering runs in three steps:
//! - `layout` measures columns and rows and wraps cell text
//! - `paint` draws rectangles, glyphs and switches onto a pixel canvas
//! - `BitmapRasterizer` ties both together behind the `RegionRasterizer` port

mod bitmap_rasterizer;
mod layout;
mod paint;

pub use bitmap_rasterizer::BitmapRasterizer;
pub use layout::{Metrics, TableLayout};
