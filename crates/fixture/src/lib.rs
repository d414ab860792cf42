//! `spnportal-fixture` — in-memory fixture server for local development.
//!
//! Simulates the SPN portal backend over the same REST surface the real
//! backend exposes, so the client and frontend can run without directory
//! access. Structure:
//! - `store.rs`: the in-memory CRUD state and its invariants
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `errors.rs`: consistent `{ "detail": ... }` error responses
//! - `middleware.rs`: bearer token gate

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

pub mod errors;
pub mod middleware;
pub mod routes;
pub mod store;

pub use store::FixtureStore;

/// Build the fixture router with freshly seeded development data.
pub fn build_app() -> Router {
    build_app_with_store(Arc::new(FixtureStore::seeded()))
}

/// Build the fixture router over an explicit store (used by tests that need
/// a known starting state).
pub fn build_app_with_store(store: Arc<FixtureStore>) -> Router {
    // Every domain route requires a bearer token; health stays public.
    let protected = routes::router()
        .layer(Extension(store))
        .layer(axum::middleware::from_fn(middleware::require_bearer));

    let versioned = Router::new()
        .route("/health", get(routes::system::health))
        .merge(protected);

    Router::new().nest("/api/v1", versioned)
}
