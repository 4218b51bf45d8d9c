//! Adapters - Implementations of the ports plus the HTTP boundary.

pub mod http;
pub mod pdf;
pub mod presentation;
pub mod raster;

pub use pdf::LopdfDocumentComposer;
pub use presentation::FormLayout;
pub use raster::BitmapRasterizer;
