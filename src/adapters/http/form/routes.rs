//! HTTP routes for form endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    append_requirement, export_region, get_form, set_answer, update_field, FormHandlers,
};

/// Read and edit endpoints.
pub fn form_routes(handlers: FormHandlers) -> Router {
    Router::new()
        .route("/form", get(get_form))
        .route("/checklist/:id/answer", put(set_answer))
        .route("/requirements", post(append_requirement))
        .route("/requirements/:index/fields/:field", put(update_field))
        .with_state(handlers)
}

/// Region downloads. These run until the file is ready.
pub fn export_routes(handlers: FormHandlers) -> Router {
    Router::new()
        .route("/regions/:region/:kind", get(export_region))
        .with_state(handlers)
}
