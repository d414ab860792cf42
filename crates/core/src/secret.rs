//! Client secret representations and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::SecretKeyId;

/// Hard cap on secrets per SPN, enforced server-side (422 when exceeded).
pub const MAX_SECRETS_PER_SPN: usize = 2;

/// Default secret lifetime when the request omits `expiryMonths`.
pub const DEFAULT_EXPIRY_MONTHS: u32 = 12;

/// A client secret as listed by the backend.
///
/// The plaintext value is absent from this shape by construction: only
/// `hint` (a short, non-sensitive prefix) survives creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub key_id: SecretKeyId,
    pub display_name: String,
    pub hint: String,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub key_vault_secret_name: String,
}

impl Secret {
    /// Whether the secret has expired relative to `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.end_date_time <= now
    }
}

/// The one-time creation response: a [`Secret`] plus the plaintext value.
///
/// `secret_text` exists only in the direct response to the create call and
/// is never retrievable again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecretCreated {
    #[serde(flatten)]
    pub secret: Secret,
    pub secret_text: String,
}

impl SecretCreated {
    /// Drop the plaintext, keeping the retrievable representation.
    pub fn into_secret(self) -> Secret {
        self.secret
    }
}

/// Body of `POST /spns/{id}/secrets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSecretRequest {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_months: Option<u32>,
}

impl CreateSecretRequest {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            expiry_months: None,
        }
    }

    pub fn with_expiry_months(mut self, months: u32) -> Self {
        self.expiry_months = Some(months);
        self
    }

    /// The requested lifetime, defaulted the way the backend defaults it.
    pub fn expiry_months_or_default(&self) -> u32 {
        self.expiry_months.unwrap_or(DEFAULT_EXPIRY_MONTHS)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.display_name.trim().is_empty() {
            return Err(DomainError::validation("displayName must not be empty"));
        }
        if self.expiry_months == Some(0) {
            return Err(DomainError::validation(
                "expiryMonths must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_secret() -> Secret {
        Secret {
            key_id: SecretKeyId::new("key-001"),
            display_name: "ci-secret".to_string(),
            hint: "aB3".to_string(),
            start_date_time: "2025-11-10T09:00:00Z".parse().unwrap(),
            end_date_time: "2026-11-10T09:00:00Z".parse().unwrap(),
            key_vault_secret_name: "spn-my-ci-pipeline-key-001".to_string(),
        }
    }

    #[test]
    fn created_secret_flattens_into_a_single_object() {
        let created = SecretCreated {
            secret: sample_secret(),
            secret_text: "MOCK_SECRET_ABC~DEF".to_string(),
        };

        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["keyId"], "key-001");
        assert_eq!(json["secretText"], "MOCK_SECRET_ABC~DEF");
        assert!(json.get("secret").is_none());
    }

    #[test]
    fn retrievable_secret_has_no_plaintext_field() {
        let json = serde_json::to_value(sample_secret()).unwrap();
        assert!(json.get("secretText").is_none());
        assert_eq!(json["hint"], "aB3");
    }

    #[test]
    fn expiry_defaults_to_twelve_months() {
        let req = CreateSecretRequest::new("s1");
        assert_eq!(req.expiry_months_or_default(), DEFAULT_EXPIRY_MONTHS);
        assert_eq!(
            req.with_expiry_months(6).expiry_months_or_default(),
            6
        );
    }

    #[test]
    fn zero_month_expiry_is_rejected() {
        let req = CreateSecretRequest::new("s1").with_expiry_months(0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn expiry_check_uses_end_date() {
        let secret = sample_secret();
        assert!(!secret.is_expired("2026-01-01T00:00:00Z".parse().unwrap()));
        assert!(secret.is_expired("2027-01-01T00:00:00Z".parse().unwrap()));
    }
}
