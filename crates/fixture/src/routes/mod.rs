use axum::{
    Router,
    routing::{delete, get},
};

pub mod owners;
pub mod secrets;
pub mod spns;
pub mod system;

/// Domain routes (everything behind the bearer gate).
pub fn router() -> Router {
    Router::new()
        .route("/spns", get(spns::list_spns).post(spns::create_spn))
        .route(
            "/spns/:spn_id",
            get(spns::get_spn)
                .patch(spns::update_spn)
                .delete(spns::delete_spn),
        )
        .route(
            "/spns/:spn_id/secrets",
            get(secrets::list_secrets).post(secrets::create_secret),
        )
        .route(
            "/spns/:spn_id/secrets/:key_id",
            delete(secrets::delete_secret),
        )
        .route(
            "/spns/:spn_id/owners",
            get(owners::list_owners).post(owners::add_owner),
        )
        .route(
            "/spns/:spn_id/owners/:owner_id",
            delete(owners::remove_owner),
        )
}
