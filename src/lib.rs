//! Compliance Form - Checklist and requirements traceability form
//!
//! A fixed compliance checklist of tri-state questions and a growable
//! requirements traceability table, with export of either table to PNG or
//! to a single-page landscape PDF.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

use std::sync::Arc;

use crate::adapters::{BitmapRasterizer, FormLayout, LopdfDocumentComposer};
use crate::application::{ExportAdapter, FormController, FormState};
use crate::config::ExportConfig;

/// Wires a fresh form session to the bitmap rasterizer and PDF composer.
pub fn bootstrap(export: &ExportConfig) -> Arc<FormController> {
    let exporter = ExportAdapter::new(
        Arc::new(FormLayout::new()),
        Arc::new(BitmapRasterizer::new()),
        Arc::new(LopdfDocumentComposer::new()),
    )
    .with_scale(export.scale);

    Arc::new(FormController::new(
        FormState::new(export.requirement_rows),
        exporter,
    ))
}
