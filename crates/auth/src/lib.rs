//! `spnportal-auth` — session and credential boundary.
//!
//! This crate is intentionally decoupled from HTTP and UI. Token issuance
//! and signature validation belong to the identity provider; what lives
//! here is the shape of a session, the credential abstraction the HTTP
//! layer consumes, and the identity-provider configuration (tenant/client
//! identifiers, authority URL, scopes).

pub mod config;
pub mod credential;
pub mod session;

pub use config::AuthConfig;
pub use credential::{AccessToken, AuthError, StaticTokenCredential, TokenCredential};
pub use session::{Account, SessionState};
