//! Typed resource client for SPN owners.

use spnportal_core::{AddOwnerRequest, Owner, OwnerId, SpnId};

use crate::http::{ApiClient, ApiError};

/// Request builders over `/spns/{id}/owners`.
#[derive(Debug)]
pub struct OwnerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> OwnerApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, spn_id: &SpnId) -> Result<Vec<Owner>, ApiError> {
        self.client.get_json(&format!("/spns/{spn_id}/owners")).await
    }

    pub async fn add(&self, spn_id: &SpnId, request: &AddOwnerRequest) -> Result<Owner, ApiError> {
        self.client
            .post_json(&format!("/spns/{spn_id}/owners"), request)
            .await
    }

    pub async fn remove(&self, spn_id: &SpnId, owner_id: &OwnerId) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/spns/{spn_id}/owners/{owner_id}"))
            .await
    }
}
