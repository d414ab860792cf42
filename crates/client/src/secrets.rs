//! Typed resource client for client secrets.

use spnportal_core::{CreateSecretRequest, Secret, SecretCreated, SecretKeyId, SpnId};

use crate::http::{ApiClient, ApiError};

/// Request builders over `/spns/{id}/secrets`.
#[derive(Debug)]
pub struct SecretApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SecretApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, spn_id: &SpnId) -> Result<Vec<Secret>, ApiError> {
        self.client.get_json(&format!("/spns/{spn_id}/secrets")).await
    }

    /// Create a secret. The response carries the plaintext `secret_text`
    /// exactly once; it is absent from every later retrieval.
    pub async fn create(
        &self,
        spn_id: &SpnId,
        request: &CreateSecretRequest,
    ) -> Result<SecretCreated, ApiError> {
        self.client
            .post_json(&format!("/spns/{spn_id}/secrets"), request)
            .await
    }

    pub async fn delete(&self, spn_id: &SpnId, key_id: &SecretKeyId) -> Result<(), ApiError> {
        self.client
            .delete(&format!("/spns/{spn_id}/secrets/{key_id}"))
            .await
    }
}
