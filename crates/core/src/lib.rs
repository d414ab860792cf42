//! `spnportal-core` — domain types shared by the client, frontend, and fixture.
//!
//! This crate contains **pure domain** types (no HTTP or UI concerns): the
//! shapes of service principals, secrets, and owners, plus the request
//! bodies used to mutate them, all serialized with the backend's camelCase
//! wire names.

pub mod error;
pub mod id;
pub mod owner;
pub mod secret;
pub mod spn;

pub use error::{DomainError, DomainResult};
pub use id::{OwnerId, SecretKeyId, SpnId};
pub use owner::{AddOwnerRequest, Owner};
pub use secret::{
    CreateSecretRequest, DEFAULT_EXPIRY_MONTHS, MAX_SECRETS_PER_SPN, Secret, SecretCreated,
};
pub use spn::{CreateSpnRequest, ServicePrincipal, UpdateSpnRequest};
