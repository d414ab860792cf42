//! Identity-provider configuration.

use serde::{Deserialize, Serialize};

/// Tenant/client identifiers for the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    pub tenant_id: String,
    pub client_id: String,
}

impl AuthConfig {
    pub fn new(tenant_id: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
        }
    }

    /// Read configuration from the environment, falling back to insecure
    /// development placeholders with a warning.
    pub fn from_env() -> Self {
        let tenant_id = std::env::var("SPNPORTAL_TENANT_ID").unwrap_or_else(|_| {
            tracing::warn!("SPNPORTAL_TENANT_ID not set; using dev placeholder");
            "common".to_string()
        });
        let client_id = std::env::var("SPNPORTAL_CLIENT_ID").unwrap_or_else(|_| {
            tracing::warn!("SPNPORTAL_CLIENT_ID not set; using dev placeholder");
            "00000000-0000-0000-0000-000000000000".to_string()
        });
        Self { tenant_id, client_id }
    }

    /// Configuration baked in at build time, for WASM builds where there is
    /// no process environment at runtime.
    pub fn compiled() -> Self {
        Self {
            tenant_id: option_env!("SPNPORTAL_TENANT_ID")
                .unwrap_or("common")
                .to_string(),
            client_id: option_env!("SPNPORTAL_CLIENT_ID")
                .unwrap_or("00000000-0000-0000-0000-000000000000")
                .to_string(),
        }
    }

    /// Authority URL for interactive sign-in.
    pub fn authority(&self) -> String {
        format!("https://login.microsoftonline.com/{}", self.tenant_id)
    }

    /// The delegated scope requested for API access tokens.
    pub fn scope(&self) -> String {
        format!("api://{}/access_as_user", self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authority_and_scope_derive_from_ids() {
        let config = AuthConfig::new("contoso.onmicrosoft.com", "abc-123");
        assert_eq!(
            config.authority(),
            "https://login.microsoftonline.com/contoso.onmicrosoft.com"
        );
        assert_eq!(config.scope(), "api://abc-123/access_as_user");
    }
}
