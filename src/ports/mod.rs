//! Ports - Interfaces for external capabilities.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! form's core and the outside world. Adapters implement these ports.
//!
//! - `RegionLayout` - Locates a named, painted region of the form
//! - `RegionRasterizer` - Turns a painted region into a pixel image
//! - `DocumentComposer` - Wraps a pixel image into a paged document

mod document_export;
mod region_layout;
mod region_rasterizer;

pub use document_export::{DocumentComposer, ExportError, ExportKind, ExportedFile};
pub use region_layout::{Cell, ColumnSpec, RegionLayout, RegionSnapshot};
pub use region_rasterizer::{RasterImage, RasterOptions, RegionRasterizer};
