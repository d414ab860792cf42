//! Typed resource client for service principals.

use spnportal_core::{CreateSpnRequest, ServicePrincipal, SpnId, UpdateSpnRequest};

use crate::http::{ApiClient, ApiError};

/// Request builders over `/spns`. No business logic: uniqueness and limits
/// are enforced by the backend.
#[derive(Debug)]
pub struct SpnApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SpnApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ServicePrincipal>, ApiError> {
        self.client.get_json("/spns").await
    }

    pub async fn get(&self, id: &SpnId) -> Result<ServicePrincipal, ApiError> {
        self.client.get_json(&format!("/spns/{id}")).await
    }

    pub async fn create(&self, request: &CreateSpnRequest) -> Result<ServicePrincipal, ApiError> {
        self.client.post_json("/spns", request).await
    }

    pub async fn update(
        &self,
        id: &SpnId,
        request: &UpdateSpnRequest,
    ) -> Result<ServicePrincipal, ApiError> {
        self.client.patch_json(&format!("/spns/{id}"), request).await
    }

    pub async fn delete(&self, id: &SpnId) -> Result<(), ApiError> {
        self.client.delete(&format!("/spns/{id}")).await
    }
}
