//! PDF adapter - Single-page documents that embed a raster image.

mod lopdf_composer;

pub use lopdf_composer::LopdfDocumentComposer;
