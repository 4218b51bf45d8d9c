//! Integration tests for the form HTTP API.
//!
//! Drives the full router (real layout, rasterizer and PDF composer) with
//! `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};

use compliance_form::adapters::http::app;
use compliance_form::config::{ExportConfig, ServerConfig};
use tower::ServiceExt;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> Router {
    let controller = compliance_form::bootstrap(&ExportConfig::default());
    app(controller, &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// Form state
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(&test_app(), Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn fresh_form_has_seven_unset_questions_and_five_blank_rows() {
    let (status, form) = send_json(&test_app(), Method::GET, "/api/form", None).await;

    assert_eq!(status, StatusCode::OK);
    let checklist = form["checklist"].as_array().unwrap();
    assert_eq!(checklist.len(), 7);
    assert!(checklist.iter().all(|e| e["answer"] == "unset"));
    assert_eq!(checklist[6]["id"], 7);

    let requirements = form["requirements"].as_array().unwrap();
    assert_eq!(requirements.len(), 5);
    assert!(requirements.iter().all(|r| r["description"] == ""));
    assert_eq!(form["regions"], json!(["checklist-table", "requirements-table"]));
}

#[tokio::test]
async fn selecting_another_category_replaces_the_answer() {
    let app = test_app();
    send_json(&app, Method::PUT, "/api/checklist/3/answer", Some(json!({"answer": "compliant"}))).await;
    let (status, form) = send_json(
        &app,
        Method::PUT,
        "/api/checklist/3/answer",
        Some(json!({"answer": "not_applicable"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let entry = &form["checklist"][2];
    assert_eq!(entry["answer"], "not_applicable");
    assert_eq!(
        entry["switches"],
        json!({"compliant": false, "non_compliant": false, "not_applicable": true})
    );
}

#[tokio::test]
async fn unknown_checklist_id_leaves_form_unchanged() {
    let app = test_app();
    let (_, before) = send_json(&app, Method::GET, "/api/form", None).await;
    let (status, after) = send_json(
        &app,
        Method::PUT,
        "/api/checklist/99/answer",
        Some(json!({"answer": "compliant"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn unknown_answer_is_bad_request() {
    let (status, body) = send_json(
        &test_app(),
        Method::PUT,
        "/api/checklist/1/answer",
        Some(json!({"answer": "maybe"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_VALUE");
    assert_eq!(body["details"]["field"], "answer");
}

#[tokio::test]
async fn requirement_edits_and_appends_are_kept() {
    let app = test_app();
    send_json(
        &app,
        Method::PUT,
        "/api/requirements/0/fields/stakeholder",
        Some(json!({"value": "QA Lead"})),
    )
    .await;
    let (status, form) = send_json(&app, Method::POST, "/api/requirements", None).await;

    assert_eq!(status, StatusCode::CREATED);
    let requirements = form["requirements"].as_array().unwrap();
    assert_eq!(requirements.len(), 6);
    assert_eq!(requirements[0]["stakeholder"], "QA Lead");
    assert_eq!(requirements[5]["stakeholder"], "");
}

#[tokio::test]
async fn field_alias_id_updates_identifier() {
    let (_, form) = send_json(
        &test_app(),
        Method::PUT,
        "/api/requirements/1/fields/id",
        Some(json!({"value": "REQ-002"})),
    )
    .await;
    assert_eq!(form["requirements"][1]["identifier"], "REQ-002");
}

#[tokio::test]
async fn out_of_range_row_leaves_form_unchanged() {
    let app = test_app();
    let (_, before) = send_json(&app, Method::GET, "/api/form", None).await;
    let (status, after) = send_json(
        &app,
        Method::PUT,
        "/api/requirements/5/fields/description",
        Some(json!({"value": "ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn oversized_row_index_leaves_form_unchanged() {
    let app = test_app();
    let (_, before) = send_json(&app, Method::GET, "/api/form", None).await;
    let (status, after) = send_json(
        &app,
        Method::PUT,
        "/api/requirements/99999999999999999999999/fields/status",
        Some(json!({"value": "Done"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn oversized_checklist_id_leaves_form_unchanged() {
    let app = test_app();
    let (_, before) = send_json(&app, Method::GET, "/api/form", None).await;
    let (status, after) = send_json(
        &app,
        Method::PUT,
        "/api/checklist/4294967296/answer",
        Some(json!({"answer": "compliant"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(before, after);
}

#[tokio::test]
async fn oversized_checklist_id_still_checks_the_answer() {
    let (status, body) = send_json(
        &test_app(),
        Method::PUT,
        "/api/checklist/4294967296/answer",
        Some(json!({"answer": "maybe"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_VALUE");
}

#[tokio::test]
async fn unknown_field_is_bad_request() {
    let (status, body) = send_json(
        &test_app(),
        Method::PUT,
        "/api/requirements/0/fields/colour",
        Some(json!({"value": "red"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_VALUE");
}

#[tokio::test]
async fn non_numeric_row_is_bad_request() {
    let (status, body) = send_json(
        &test_app(),
        Method::PUT,
        "/api/requirements/first/fields/status",
        Some(json!({"value": "Done"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_FORMAT");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (status, body) = send_json(
        &test_app(),
        Method::PUT,
        "/api/requirements/0/fields/status",
        Some(json!({"text": "Done"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Exports
// =============================================================================

#[tokio::test]
async fn checklist_image_downloads_as_png() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/regions/checklist-table/image")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"lista-de-chequeo.png\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let image = image::load_from_memory(&bytes).unwrap();
    assert!(image.width() >= 850);
}

#[tokio::test]
async fn requirements_document_is_single_landscape_page() {
    let app = test_app();
    send_json(&app, Method::POST, "/api/requirements", None).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/regions/requirements-table/document?file_name=trazabilidad.pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"trazabilidad.pdf\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let document = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = document.get_pages();
    assert_eq!(pages.len(), 1);

    let page_id = *pages.values().next().unwrap();
    let page = document.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    let width = media_box[2].as_i64().unwrap();
    let height = media_box[3].as_i64().unwrap();
    assert!(width >= height);
}

#[tokio::test]
async fn five_hundred_row_table_exports_as_image() {
    let app = test_app();
    for _ in 0..495 {
        send(&app, Method::POST, "/api/requirements", None).await;
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/regions/requirements-table/image")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let image = image::load_from_memory(&bytes).unwrap();
    assert!(image.height() > 16_384);
}

#[tokio::test]
async fn exporting_unknown_region_is_no_content() {
    let app = test_app();
    let (image_status, image_body) =
        send(&app, Method::GET, "/api/regions/summary/image", None).await;
    let (pdf_status, pdf_body) =
        send(&app, Method::GET, "/api/regions/summary/document", None).await;

    assert_eq!(image_status, StatusCode::NO_CONTENT);
    assert_eq!(pdf_status, StatusCode::NO_CONTENT);
    assert!(image_body.is_empty());
    assert!(pdf_body.is_empty());
}

#[tokio::test]
async fn export_does_not_change_form() {
    let app = test_app();
    send_json(&app, Method::PUT, "/api/checklist/1/answer", Some(json!({"answer": "compliant"}))).await;
    let (_, before) = send_json(&app, Method::GET, "/api/form", None).await;

    send(&app, Method::GET, "/api/regions/checklist-table/document", None).await;
    let (_, after) = send_json(&app, Method::GET, "/api/form", None).await;

    assert_eq!(before, after);
}

#[tokio::test]
async fn unsupported_export_kind_is_bad_request() {
    let (status, body) = send_json(
        &test_app(),
        Method::GET,
        "/api/regions/checklist-table/gif",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "UNKNOWN_VALUE");
}

#[tokio::test]
async fn pdf_alias_downloads_document_with_default_name() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api/regions/requirements-table/pdf")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"plantilla-trazabilidad-requisitos.pdf\""
    );
}
