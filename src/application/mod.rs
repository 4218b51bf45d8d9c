//! Application layer - Orchestrates the form models and exports.
//!
//! - `FormState` - The two models a session owns
//! - `ExportAdapter` - Region capture to PNG / PDF
//! - `FormController` - The session entry point used by the presentation boundary

mod export_adapter;
mod form_controller;
mod form_state;

pub use export_adapter::ExportAdapter;
pub use form_controller::{ExportRegionCommand, FormController};
pub use form_state::FormState;
