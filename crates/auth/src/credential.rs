//! Credential abstraction consumed by the HTTP layer.

use thiserror::Error;

/// An opaque bearer token.
///
/// Deliberately not `Display`/`Debug`-printable in full so tokens do not
/// leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Authentication failure taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No account in the active session; the caller must sign in first.
    #[error("no authenticated account found")]
    NoAccount,

    /// Silent token acquisition failed and no redirect was attempted.
    #[error("token refresh failed: {0}")]
    RefreshFailed(String),

    /// Silent acquisition failed and an interactive redirect has been
    /// started; the in-flight call must fail because the page is about to
    /// navigate away.
    #[error("redirecting for interactive authentication")]
    RedirectInProgress,
}

/// Source of bearer tokens for API calls.
///
/// Implementations are injected into the HTTP client; there is no
/// module-level singleton session. Token acquisition is synchronous in this
/// client: the session (or its stand-in) is local, and a refresh miss is
/// resolved by redirecting rather than awaiting.
pub trait TokenCredential: Send + Sync {
    fn access_token(&self) -> Result<AccessToken, AuthError>;
}

/// Fixed stand-in credential used when running against the fixture server.
#[derive(Debug, Clone)]
pub struct StaticTokenCredential {
    token: AccessToken,
}

impl StaticTokenCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: AccessToken::new(token),
        }
    }

    /// The well-known fixture token.
    pub fn fixture() -> Self {
        Self::new("fixture-token")
    }
}

impl TokenCredential for StaticTokenCredential {
    fn access_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.token.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credential_always_resolves() {
        let credential = StaticTokenCredential::fixture();
        let token = credential.access_token().unwrap();
        assert_eq!(token.as_str(), "fixture-token");
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = AccessToken::new("super-secret");
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
    }
}
