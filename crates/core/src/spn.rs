//! Service principal (SPN) representations and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::{OwnerId, SpnId};

/// Maximum length of an SPN display name, matching backend validation.
pub const MAX_DISPLAY_NAME_LEN: usize = 120;

/// A service principal as returned by the backend.
///
/// `secret_count` is derived server-side from the secret list length; the
/// client treats it as read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipal {
    pub id: SpnId,
    pub display_name: String,
    pub app_id: String,
    pub description: Option<String>,
    pub homepage_url: Option<String>,
    #[serde(default)]
    pub reply_urls: Vec<String>,
    pub owner_id: OwnerId,
    pub owner_upn: String,
    pub secret_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /spns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpnRequest {
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_urls: Option<Vec<String>>,
}

impl CreateSpnRequest {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            description: None,
            homepage_url: None,
            reply_urls: None,
        }
    }

    /// Validate the request the way the backend does (length bounds only;
    /// uniqueness is checked against directory state, not here).
    pub fn validate(&self) -> DomainResult<()> {
        if self.display_name.trim().is_empty() {
            return Err(DomainError::validation("displayName must not be empty"));
        }
        if self.display_name.len() > MAX_DISPLAY_NAME_LEN {
            return Err(DomainError::validation(format!(
                "displayName must be at most {MAX_DISPLAY_NAME_LEN} characters"
            )));
        }
        Ok(())
    }
}

/// Body of `PATCH /spns/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpnRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_urls: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spn_uses_camel_case_wire_names() {
        let json = serde_json::json!({
            "id": "spn-001",
            "displayName": "my-ci-pipeline",
            "appId": "aaaaaaaa-0001-0001-0001-aaaaaaaaaaaa",
            "description": "Used by GitLab CI to deploy to dev",
            "homepageUrl": null,
            "replyUrls": [],
            "ownerId": "user-001",
            "ownerUpn": "alice@company.com",
            "secretCount": 1,
            "createdAt": "2025-11-10T09:00:00Z",
        });

        let spn: ServicePrincipal = serde_json::from_value(json).unwrap();
        assert_eq!(spn.id, SpnId::new("spn-001"));
        assert_eq!(spn.display_name, "my-ci-pipeline");
        assert_eq!(spn.secret_count, 1);

        let back = serde_json::to_value(&spn).unwrap();
        assert_eq!(back["ownerUpn"], "alice@company.com");
        assert!(back.get("display_name").is_none());
    }

    #[test]
    fn reply_urls_default_to_empty_when_absent() {
        let json = serde_json::json!({
            "id": "spn-003",
            "displayName": "monitoring-exporter",
            "appId": "cccccccc-0003-0003-0003-cccccccccccc",
            "description": null,
            "homepageUrl": null,
            "ownerId": "user-001",
            "ownerUpn": "alice@company.com",
            "secretCount": 0,
            "createdAt": "2026-01-15T11:00:00Z",
        });

        let spn: ServicePrincipal = serde_json::from_value(json).unwrap();
        assert!(spn.reply_urls.is_empty());
    }

    #[test]
    fn create_request_rejects_empty_and_oversized_names() {
        assert!(CreateSpnRequest::new("svc-a").validate().is_ok());
        assert!(CreateSpnRequest::new("  ").validate().is_err());
        assert!(CreateSpnRequest::new("x".repeat(121)).validate().is_err());
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let body = serde_json::to_value(CreateSpnRequest::new("svc-a")).unwrap();
        assert_eq!(body["displayName"], "svc-a");
        assert!(body.get("description").is_none());
        assert!(body.get("replyUrls").is_none());
    }
}
