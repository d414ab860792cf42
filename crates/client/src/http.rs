//! HTTP request wrapper: bearer credentials, JSON negotiation, error
//! normalization.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use spnportal_auth::{AuthError, TokenCredential};

use crate::config::ClientConfig;
use crate::owners::OwnerApi;
use crate::secrets::SecretApi;
use crate::spns::SpnApi;

/// Failure taxonomy for API calls.
///
/// Authentication failures, non-success responses (status + backend
/// `detail`), and transport failures are kept distinct so views can surface
/// them appropriately; none of them is fatal to the application.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Non-2xx response. `detail` is extracted from the body's `detail`
    /// field, falling back to the status reason when the body is not JSON.
    #[error("API error {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status, when the failure was a non-success response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape used by the backend for every failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Thin HTTP client over the backend REST surface.
///
/// Cheap to clone; the credential is injected, never a module-level
/// singleton.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credential: Arc<dyn TokenCredential>,
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credential,
        })
    }

    pub fn spns(&self) -> SpnApi<'_> {
        SpnApi::new(self)
    }

    pub fn secrets(&self) -> SecretApi<'_> {
        SecretApi::new(self)
    }

    pub fn owners(&self) -> OwnerApi<'_> {
        OwnerApi::new(self)
    }

    /// GET with one uniform retry on transport-level failure. Non-success
    /// responses are not retried, and writes never go through this path.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        match self.request_json(Method::GET, path, None::<&()>).await {
            Err(ApiError::Transport(err)) => {
                tracing::debug!(path, error = %err, "transient fetch failure, retrying once");
                self.request_json(Method::GET, path, None::<&()>).await
            }
            other => other,
        }
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request_json(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request_json(Method::PATCH, path, Some(body)).await
    }

    /// DELETE; a 204 resolves to the empty value.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.execute(Method::DELETE, path, None::<&()>).await?;
        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::status_error(response).await)
    }

    async fn request_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, body).await?;
        if !response.status().is_success() {
            let err = Self::status_error(response).await;
            tracing::warn!(path, error = %err, "request failed");
            return Err(err);
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let token = self.credential.access_token()?;
        let mut request = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(token.as_str());
        if let Some(body) = body {
            request = request.json(body);
        }
        Ok(request.send().await?)
    }

    async fn status_error(response: reqwest::Response) -> ApiError {
        let status = response.status();
        let detail = match response.json::<ErrorBody>().await {
            Ok(body) => body.detail,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        ApiError::Status {
            status: status.as_u16(),
            detail,
        }
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
