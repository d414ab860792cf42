use axum::extract::Request;
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::errors;

/// Require a bearer token on every domain route.
///
/// The fixture accepts any non-empty token; it simulates the transport
/// contract, not the identity provider.
pub async fn require_bearer(req: Request, next: Next) -> Response {
    match extract_bearer(req.headers()) {
        Ok(_) => next.run(req).await,
        Err(status) => errors::json_error(status, "Missing or invalid bearer token"),
    }
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, StatusCode> {
    let header = headers
        .get(header::AUTHORIZATION)
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let header = header.to_str().map_err(|_| StatusCode::UNAUTHORIZED)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?
        .trim();

    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(token)
}
