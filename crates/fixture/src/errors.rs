use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use spnportal_core::DomainError;

/// Map a domain failure onto the backend's status conventions.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
        DomainError::InvariantViolation(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, msg),
    }
}

/// Every failure body has the shape `{ "detail": string }`.
pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (status, Json(json!({ "detail": detail.into() }))).into_response()
}
