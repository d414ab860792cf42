//! Owner representations and request bodies.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::id::OwnerId;

/// A user principal permitted to manage a given SPN.
///
/// `upn` is unique per SPN; the backend rejects duplicates with a conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: OwnerId,
    pub display_name: String,
    pub upn: String,
    pub mail: Option<String>,
}

/// Body of `POST /spns/{id}/owners`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOwnerRequest {
    pub upn: String,
}

impl AddOwnerRequest {
    pub fn new(upn: impl Into<String>) -> Self {
        Self { upn: upn.into() }
    }

    pub fn validate(&self) -> DomainResult<()> {
        let upn = self.upn.trim();
        if upn.is_empty() {
            return Err(DomainError::validation("upn must not be empty"));
        }
        if !upn.contains('@') {
            return Err(DomainError::validation(
                "upn must be a user principal name (user@domain)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_round_trips_with_camel_case_names() {
        let json = serde_json::json!({
            "id": "user-001",
            "displayName": "Alice Smith",
            "upn": "alice@company.com",
            "mail": "alice@company.com",
        });

        let owner: Owner = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(owner.id, OwnerId::new("user-001"));
        assert_eq!(serde_json::to_value(&owner).unwrap(), json);
    }

    #[test]
    fn add_owner_requires_a_upn_shape() {
        assert!(AddOwnerRequest::new("bob@company.com").validate().is_ok());
        assert!(AddOwnerRequest::new("").validate().is_err());
        assert!(AddOwnerRequest::new("not-a-upn").validate().is_err());
    }
}
