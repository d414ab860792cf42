use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use spnportal_core::{CreateSecretRequest, SecretKeyId, SpnId};

use crate::errors;
use crate::store::FixtureStore;

pub async fn list_secrets(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
) -> axum::response::Response {
    match store.list_secrets(&SpnId::new(spn_id)) {
        Ok(secrets) => Json(secrets).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// The only endpoint that ever returns `secretText`.
pub async fn create_secret(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
    Json(body): Json<CreateSecretRequest>,
) -> axum::response::Response {
    match store.create_secret(&SpnId::new(spn_id), body) {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_secret(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path((spn_id, key_id)): Path<(String, String)>,
) -> axum::response::Response {
    match store.delete_secret(&SpnId::new(spn_id), &SecretKeyId::new(key_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
