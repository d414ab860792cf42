use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};

use spnportal_core::{CreateSpnRequest, SpnId, UpdateSpnRequest};

use crate::errors;
use crate::store::FixtureStore;

pub async fn list_spns(
    Extension(store): Extension<Arc<FixtureStore>>,
) -> axum::response::Response {
    Json(store.list_spns()).into_response()
}

pub async fn get_spn(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
) -> axum::response::Response {
    match store.get_spn(&SpnId::new(spn_id)) {
        Ok(spn) => Json(spn).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_spn(
    Extension(store): Extension<Arc<FixtureStore>>,
    Json(body): Json<CreateSpnRequest>,
) -> axum::response::Response {
    match store.create_spn(body) {
        Ok(spn) => (StatusCode::CREATED, Json(spn)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_spn(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
    Json(body): Json<UpdateSpnRequest>,
) -> axum::response::Response {
    match store.update_spn(&SpnId::new(spn_id), body) {
        Ok(spn) => Json(spn).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_spn(
    Extension(store): Extension<Arc<FixtureStore>>,
    Path(spn_id): Path<String>,
) -> axum::response::Response {
    match store.delete_spn(&SpnId::new(spn_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
