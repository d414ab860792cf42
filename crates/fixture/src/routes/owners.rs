use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use spnportal_core::{AddOwnerRequest, OwnerId, SpnId};

use crate::errors;
use crate::store::FixtureStore;

pub async fn list_owners(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
) -> axum::response::Response {
    match store.list_owners(&SpnId::new(spn_id)) {
        Ok(owners) => Json(owners).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn add_owner(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
    Json(body): Json<AddOwnerRequest>,
) -> axum::response::Response {
    match store.add_owner(&SpnId::new(spn_id), body) {
        Ok(owner) => (StatusCode::CREATED, Json(owner)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn remove_owner(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path((spn_id, owner_id)): Path<(String, String)>,
) -> axum::response::Response {
    match store.remove_owner(&SpnId::new(spn_id), &OwnerId::new(owner_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
