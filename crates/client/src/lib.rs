//! `spnportal-client` — typed API client for the SPN portal backend.
//!
//! Three layers, bottom-up:
//! - `http`: the request wrapper — resolves a bearer token from the injected
//!   credential, negotiates JSON, normalizes failures into [`ApiError`].
//! - `spns` / `secrets` / `owners`: typed resource clients, one method per
//!   backend endpoint, no business logic.
//! - `cache`: a key-addressed query cache with manual invalidation, so views
//!   can refetch after mutations without holding authoritative state.

pub mod cache;
pub mod config;
pub mod http;
pub mod owners;
pub mod secrets;
pub mod spns;

pub use cache::{QueryCache, QueryKey};
pub use config::ClientConfig;
pub use http::{ApiClient, ApiError};
pub use owners::OwnerApi;
pub use secrets::SecretApi;
pub use spns::SpnApi;
