//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, conflicts). Transport and auth concerns belong to the client
/// and auth crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A request body failed validation (e.g. empty display name).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A hard limit was exceeded (e.g. the two-secret cap per SPN).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// The addressed entity does not exist.
    #[error("not found")]
    NotFound,

    /// A uniqueness conflict (duplicate SPN display name, duplicate owner UPN).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
