//! HTTP handlers for form endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use crate::application::{ExportRegionCommand, FormController, FormState};
use crate::domain::checklist::ChecklistChoice;
use crate::domain::foundation::{ChecklistEntryId, DomainError, RegionId, ValidationError};
use crate::domain::requirements::RequirementField;
use crate::ports::{ExportError, ExportKind, ExportedFile};

use super::dto::{
    ErrorResponse, ExportQuery, FormResponse, SetAnswerRequest, UpdateFieldRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FormHandlers {
    controller: Arc<FormController>,
}

impl FormHandlers {
    pub fn new(controller: Arc<FormController>) -> Self {
        Self { controller }
    }

    fn respond(&self, status: StatusCode, state: &FormState) -> Response {
        let regions = self.controller.exporter().layout().regions();
        let body = FormResponse::new(self.controller.id(), state, regions);
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/form - Current checklist and requirements
pub async fn get_form(State(handlers): State<FormHandlers>) -> Response {
    let state = handlers.controller.view().await;
    handlers.respond(StatusCode::OK, &state)
}

/// PUT /api/checklist/:id/answer - Select a category for one question
///
/// Unknown ids, including ones too large to be any id, leave the form
/// unchanged.
pub async fn set_answer(
    State(handlers): State<FormHandlers>,
    Path(raw_id): Path<String>,
    payload: Result<Json<SetAnswerRequest>, JsonRejection>,
) -> Response {
    let id = match parse_position::<u32>(&raw_id, "checklist_id") {
        Ok(id) => id.map(ChecklistEntryId::new),
        Err(e) => return validation_error(e),
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    let choice = match req.answer.parse::<ChecklistChoice>() {
        Ok(choice) => choice,
        Err(e) => return validation_error(e),
    };

    let state = match id {
        Some(id) => handlers.controller.toggle(id, choice).await,
        None => {
            debug!(checklist_id = %raw_id, "checklist id out of range, nothing to update");
            handlers.controller.view().await
        }
    };
    handlers.respond(StatusCode::OK, &state)
}

/// PUT /api/requirements/:index/fields/:field - Replace one requirement field
///
/// Rows past the end of the table leave the form unchanged.
pub async fn update_field(
    State(handlers): State<FormHandlers>,
    Path((index, field)): Path<(String, String)>,
    payload: Result<Json<UpdateFieldRequest>, JsonRejection>,
) -> Response {
    let row = match parse_position::<usize>(&index, "index") {
        Ok(row) => row,
        Err(e) => return validation_error(e),
    };
    let field = match field.parse::<RequirementField>() {
        Ok(field) => field,
        Err(e) => return validation_error(e),
    };
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let state = match row {
        Some(row) => handlers.controller.update_field(row, field, req.value).await,
        None => {
            debug!(index = %index, "row index out of range, nothing to update");
            handlers.controller.view().await
        }
    };
    handlers.respond(StatusCode::OK, &state)
}

/// POST /api/requirements - Append a blank requirement row
pub async fn append_requirement(State(handlers): State<FormHandlers>) -> Response {
    let state = handlers.controller.append_requirement().await;
    handlers.respond(StatusCode::CREATED, &state)
}

/// GET /api/regions/:region/:kind - Download a region
///
/// `kind` is `image` (PNG) or `document` (one-page PDF). Regions that do
/// not exist answer 204 with no body.
pub async fn export_region(
    State(handlers): State<FormHandlers>,
    Path((region, kind)): Path<(String, String)>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let kind = match kind.parse::<ExportKind>() {
        Ok(kind) => kind,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::from(DomainError::from(e))),
            )
                .into_response()
        }
    };
    run_export(handlers, region, kind, query).await
}

async fn run_export(
    handlers: FormHandlers,
    region: String,
    kind: ExportKind,
    query: ExportQuery,
) -> Response {
    let region = match RegionId::new(region) {
        Ok(region) => region,
        Err(e) => return validation_error(e),
    };

    let cmd = ExportRegionCommand {
        region: region.clone(),
        kind,
        file_name: query.file_name,
    };

    match handlers.controller.export(cmd).await {
        Ok(Some(file)) => attachment(file),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_export_error(&region, kind, e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

fn attachment(file: ExportedFile) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_file_name(&file.file_name)
    );
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(file.kind.content_type())),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response()
}

/// Replaces characters that cannot appear inside a quoted header parameter.
fn header_safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Parses a numeric path segment.
///
/// Non-digits are a format error. A number too large for `T` cannot name
/// an existing row or question and yields `None`.
fn parse_position<T: FromStr>(raw: &str, field: &str) -> Result<Option<T>, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::invalid_format(
            field,
            format!("'{}' is not a number", raw),
        ));
    }
    Ok(raw.parse().ok())
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn validation_error(error: ValidationError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::from(DomainError::from(error))),
    )
        .into_response()
}

fn handle_export_error(region: &RegionId, kind: ExportKind, error: ExportError) -> Response {
    error!(region = %region, kind = %kind, error = %error, "region export failed");
    let status = match error {
        ExportError::UnsupportedKind(_) => StatusCode::BAD_REQUEST,
        ExportError::RasterizationFailed(_)
        | ExportError::EncodingFailed(_)
        | ExportError::CompositionFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorResponse::from(DomainError::from(error).with_detail("region", region.as_str()));
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composition_failure_maps_to_500() {
        let response = handle_export_error(
            &RegionId::requirements(),
            ExportKind::Document,
            ExportError::composition_failed("disk full"),
        );
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unsupported_kind_maps_to_400() {
        let response = handle_export_error(
            &RegionId::checklist(),
            ExportKind::Image,
            ExportError::UnsupportedKind("gif".to_string()),
        );
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_maps_to_400() {
        let response = validation_error(ValidationError::unknown_value("field", "color"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn parse_position_treats_overflow_as_no_target() {
        assert_eq!(parse_position::<u32>("7", "checklist_id"), Ok(Some(7)));
        assert_eq!(parse_position::<u32>("4294967296", "checklist_id"), Ok(None));
        assert_eq!(
            parse_position::<usize>("99999999999999999999999", "index"),
            Ok(None)
        );
    }

    #[test]
    fn parse_position_rejects_non_digits() {
        for raw in ["", "first", "-1", "+2", " 3"] {
            let err = parse_position::<usize>(raw, "index").unwrap_err();
            assert_eq!(err.field(), "index");
        }
    }

    #[test]
    fn header_safe_file_name_replaces_quotes_and_non_ascii() {
        assert_eq!(header_safe_file_name("lista.png"), "lista.png");
        assert_eq!(header_safe_file_name("a\"b\\c.pdf"), "a_b_c.pdf");
        assert_eq!(header_safe_file_name("año 1.pdf"), "a_o 1.pdf");
    }

    #[test]
    fn attachment_sets_download_headers() {
        let file = ExportedFile::new(vec![1, 2, 3], ExportKind::Image, "lista-de-chequeo.png");
        let response = attachment(file);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"lista-de-chequeo.png\""
        );
    }
}
