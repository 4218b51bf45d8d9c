//! HTTP adapter for the compliance form.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ChecklistEntryResponse, ErrorResponse, ExportQuery, FormResponse, SetAnswerRequest,
    UpdateFieldRequest,
};
pub use handlers::FormHandlers;
pub use routes::{export_routes, form_routes};
