//! HTTP adapters - REST API and router assembly.
//!
//! ```text
//! SetRequestId → TraceLayer → PropagateRequestId → CORS → [Timeout] → Handler
//! ```
//!
//! The request timeout applies to reads and edits only. Region exports
//! are never cut off.

pub mod form;

use std::sync::Arc;

use axum::{routing::get, Router};
use http::{header, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::application::FormController;
use crate::config::ServerConfig;

pub use form::{export_routes, form_routes, FormHandlers};

/// Assemble the application router: form API under `/api`, plus `/health`.
pub fn app(controller: Arc<FormController>, server: &ServerConfig) -> Router {
    let handlers = FormHandlers::new(controller);
    let api = form_routes(handlers.clone())
        .layer(TimeoutLayer::new(server.request_timeout()))
        .merge(export_routes(handlers));

    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors_layer(server));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(middleware)
}

/// Liveness check.
async fn health() -> &'static str {
    "ok"
}

/// CORS from the configured origins. `*` allows any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let configured = server.allowed_origins();
    let allow_origin = if configured.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = configured
            .into_iter()
            .filter_map(|origin| match HeaderValue::from_str(&origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::PUT, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION])
}
